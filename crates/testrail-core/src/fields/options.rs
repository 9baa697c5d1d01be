use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use super::kind::FieldKind;
use super::wire;
use crate::ids::UserId;

/// Item list validation failures for dropdown and multiselect fields
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemsError {
    #[error("items cannot be empty")]
    Empty,

    #[error("default_value is not a valid index into items")]
    DefaultOutOfRange,
}

/// Rendering mode for text and steps fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    Plain,
    Markdown,
}

/// Visible row count for text and steps fields.
///
/// The server models this as a string: unset rides as `""`, otherwise one of
/// `"3"` through `"10"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowCount {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
}

impl RowCount {
    /// Number of rows, when one was chosen
    pub fn rows(&self) -> Option<u8> {
        match self {
            RowCount::Unspecified => None,
            RowCount::Three => Some(3),
            RowCount::Four => Some(4),
            RowCount::Five => Some(5),
            RowCount::Six => Some(6),
            RowCount::Seven => Some(7),
            RowCount::Eight => Some(8),
            RowCount::Nine => Some(9),
            RowCount::Ten => Some(10),
        }
    }
}

mod private {
    pub trait Sealed {}
}

/// Kind-specific payload of a field creation request.
///
/// Implemented by exactly the eleven option types; the trait is sealed
/// because the server's kind set is closed.
pub trait FieldOptions: private::Sealed {
    /// The kind this payload creates
    const KIND: FieldKind;
}

// ============================================================================
// Option payloads per kind
// ============================================================================

/// Options for a string field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringOptions {
    pub is_required: bool,
    /// Default text; rides the wire as `""` when absent
    #[serde(with = "wire::opt_str")]
    pub default_value: Option<String>,
}

impl StringOptions {
    pub fn new(is_required: bool, default_value: Option<String>) -> Self {
        Self {
            is_required,
            default_value,
        }
    }
}

/// Options for an integer field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerOptions {
    pub is_required: bool,
    /// Default number; stringified on the wire, `""` when absent
    #[serde(with = "wire::opt_str")]
    pub default_value: Option<i64>,
}

impl IntegerOptions {
    pub fn new(is_required: bool, default_value: Option<i64>) -> Self {
        Self {
            is_required,
            default_value,
        }
    }
}

/// Options for a multi-line text field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextOptions {
    pub is_required: bool,
    #[serde(with = "wire::opt_str")]
    pub default_value: Option<String>,
    pub format: TextFormat,
    pub rows: RowCount,
}

impl TextOptions {
    pub fn new(
        is_required: bool,
        default_value: Option<String>,
        format: TextFormat,
        rows: RowCount,
    ) -> Self {
        Self {
            is_required,
            default_value,
            format,
            rows,
        }
    }
}

/// Options for a URL field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlOptions {
    pub is_required: bool,
    /// Default link; rides the wire as `""` when absent
    #[serde(with = "wire::opt_str")]
    pub default_value: Option<Url>,
}

impl UrlOptions {
    pub fn new(is_required: bool, default_value: Option<Url>) -> Self {
        Self {
            is_required,
            default_value,
        }
    }
}

/// Options for a checkbox field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxOptions {
    pub is_required: bool,
    /// Default state; the server sends `"0"/"1"` or `"true"/"false"` in any
    /// casing and we always write lowercase `"true"/"false"`
    #[serde(with = "wire::bool_str")]
    pub default_value: bool,
}

impl CheckboxOptions {
    pub fn new(is_required: bool, default_value: bool) -> Self {
        Self {
            is_required,
            default_value,
        }
    }
}

/// Options for a dropdown field.
///
/// `items` and `default_value` stay private so the invariants hold at all
/// times: the item list is never empty and the default always indexes into
/// it. In memory the default is a 0-based index; the wire form carries it
/// 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DropdownWire", into = "DropdownWire")]
pub struct DropdownOptions {
    pub is_required: bool,
    items: Vec<String>,
    default_value: usize,
}

impl DropdownOptions {
    /// Creates dropdown options; `default_value` is a 0-based index into
    /// `items`.
    pub fn new(
        is_required: bool,
        items: Vec<String>,
        default_value: usize,
    ) -> Result<Self, ItemsError> {
        Self::validate(&items, default_value)?;
        Ok(Self {
            is_required,
            items,
            default_value,
        })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// 0-based index of the default item
    pub fn default_value(&self) -> usize {
        self.default_value
    }

    /// Replaces the item list and default together. Validation happens
    /// before any state changes, so a rejected update leaves the previous
    /// values intact.
    pub fn set_items(
        &mut self,
        items: Vec<String>,
        default_value: usize,
    ) -> Result<(), ItemsError> {
        Self::validate(&items, default_value)?;
        self.items = items;
        self.default_value = default_value;
        Ok(())
    }

    fn validate(items: &[String], default_value: usize) -> Result<(), ItemsError> {
        if items.is_empty() {
            return Err(ItemsError::Empty);
        }
        if default_value >= items.len() {
            return Err(ItemsError::DefaultOutOfRange);
        }
        Ok(())
    }
}

/// Options for a user field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserOptions {
    pub is_required: bool,
    /// Default assignee; stringified user id on the wire, `""` when absent
    #[serde(with = "wire::opt_str")]
    pub default_value: Option<UserId>,
}

impl UserOptions {
    pub fn new(is_required: bool, default_value: Option<UserId>) -> Self {
        Self {
            is_required,
            default_value,
        }
    }
}

/// Options for a date field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOptions {
    pub is_required: bool,
}

impl DateOptions {
    pub fn new(is_required: bool) -> Self {
        Self { is_required }
    }
}

/// Options for a milestone field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneOptions {
    pub is_required: bool,
}

impl MilestoneOptions {
    pub fn new(is_required: bool) -> Self {
        Self { is_required }
    }
}

/// Options for a separated-steps field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepsOptions {
    pub is_required: bool,
    pub format: TextFormat,
    /// Whether each step carries an expected-result column
    pub has_expected: bool,
    pub rows: RowCount,
}

impl StepsOptions {
    pub fn new(is_required: bool, format: TextFormat, has_expected: bool, rows: RowCount) -> Self {
        Self {
            is_required,
            format,
            has_expected,
            rows,
        }
    }
}

/// Options for a multiselect field.
///
/// `items` stays private so the non-empty invariant holds at all times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MultiselectWire", into = "MultiselectWire")]
pub struct MultiselectOptions {
    pub is_required: bool,
    items: Vec<String>,
}

impl MultiselectOptions {
    pub fn new(is_required: bool, items: Vec<String>) -> Result<Self, ItemsError> {
        if items.is_empty() {
            return Err(ItemsError::Empty);
        }
        Ok(Self { is_required, items })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Replaces the item list. Validation happens before any state changes.
    pub fn set_items(&mut self, items: Vec<String>) -> Result<(), ItemsError> {
        if items.is_empty() {
            return Err(ItemsError::Empty);
        }
        self.items = items;
        Ok(())
    }
}

// ============================================================================
// Wire forms
// ============================================================================

/// Wire form of [`DropdownOptions`]: numbered-line items and a 1-indexed
/// stringified default.
#[derive(Serialize, Deserialize)]
struct DropdownWire {
    is_required: bool,
    #[serde(with = "wire::items")]
    items: Vec<String>,
    #[serde(with = "wire::int_str")]
    default_value: i64,
}

impl TryFrom<DropdownWire> for DropdownOptions {
    type Error = ItemsError;

    fn try_from(wire: DropdownWire) -> Result<Self, ItemsError> {
        if wire.items.is_empty() {
            return Err(ItemsError::Empty);
        }
        // The wire default is 1-indexed.
        let index = wire
            .default_value
            .checked_sub(1)
            .and_then(|value| usize::try_from(value).ok())
            .ok_or(ItemsError::DefaultOutOfRange)?;
        Self::new(wire.is_required, wire.items, index)
    }
}

impl From<DropdownOptions> for DropdownWire {
    fn from(options: DropdownOptions) -> Self {
        Self {
            is_required: options.is_required,
            default_value: options.default_value as i64 + 1,
            items: options.items,
        }
    }
}

/// Wire form of [`MultiselectOptions`] with numbered-line items.
#[derive(Serialize, Deserialize)]
struct MultiselectWire {
    is_required: bool,
    #[serde(with = "wire::items")]
    items: Vec<String>,
}

impl TryFrom<MultiselectWire> for MultiselectOptions {
    type Error = ItemsError;

    fn try_from(wire: MultiselectWire) -> Result<Self, ItemsError> {
        Self::new(wire.is_required, wire.items)
    }
}

impl From<MultiselectOptions> for MultiselectWire {
    fn from(options: MultiselectOptions) -> Self {
        Self {
            is_required: options.is_required,
            items: options.items,
        }
    }
}

// ============================================================================
// Kind bindings
// ============================================================================

impl private::Sealed for StringOptions {}
impl FieldOptions for StringOptions {
    const KIND: FieldKind = FieldKind::String;
}

impl private::Sealed for IntegerOptions {}
impl FieldOptions for IntegerOptions {
    const KIND: FieldKind = FieldKind::Integer;
}

impl private::Sealed for TextOptions {}
impl FieldOptions for TextOptions {
    const KIND: FieldKind = FieldKind::Text;
}

impl private::Sealed for UrlOptions {}
impl FieldOptions for UrlOptions {
    const KIND: FieldKind = FieldKind::Url;
}

impl private::Sealed for CheckboxOptions {}
impl FieldOptions for CheckboxOptions {
    const KIND: FieldKind = FieldKind::Checkbox;
}

impl private::Sealed for DropdownOptions {}
impl FieldOptions for DropdownOptions {
    const KIND: FieldKind = FieldKind::Dropdown;
}

impl private::Sealed for UserOptions {}
impl FieldOptions for UserOptions {
    const KIND: FieldKind = FieldKind::User;
}

impl private::Sealed for DateOptions {}
impl FieldOptions for DateOptions {
    const KIND: FieldKind = FieldKind::Date;
}

impl private::Sealed for MilestoneOptions {}
impl FieldOptions for MilestoneOptions {
    const KIND: FieldKind = FieldKind::Milestone;
}

impl private::Sealed for StepsOptions {}
impl FieldOptions for StepsOptions {
    const KIND: FieldKind = FieldKind::Steps;
}

impl private::Sealed for MultiselectOptions {}
impl FieldOptions for MultiselectOptions {
    const KIND: FieldKind = FieldKind::Multiselect;
}
