use serde::{Deserialize, Serialize};

use super::config::{FieldConfig, FieldContext};
use super::kind::FieldKind;
use super::options::{
    CheckboxOptions, DateOptions, DropdownOptions, FieldOptions, IntegerOptions, MilestoneOptions,
    MultiselectOptions, StepsOptions, StringOptions, TextOptions, UrlOptions, UserOptions,
};
use crate::error::Result;
use crate::ids::TemplateId;

/// Request body for creating a custom case field with payload `O`.
///
/// The payload type pins the kind at compile time: a
/// `CreateCaseField<DropdownOptions>` can only carry dropdown configs and its
/// wire `type` tag comes from the payload type rather than a stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCaseField<O: FieldOptions> {
    /// Human-facing label shown in the UI
    pub label: String,
    /// System name; the server exposes the value under `custom_<name>`
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the field applies to every template
    pub include_all: bool,
    /// Explicit template scope used when `include_all` is false
    pub template_ids: Vec<TemplateId>,
    pub configs: Vec<FieldConfig<O>>,
}

impl<O: FieldOptions> CreateCaseField<O> {
    /// Builds a request carrying a single config for `context`
    pub fn new(
        label: String,
        name: String,
        description: Option<String>,
        include_all: bool,
        template_ids: Vec<TemplateId>,
        context: FieldContext,
        options: O,
    ) -> Self {
        Self {
            label,
            name,
            description,
            include_all,
            template_ids,
            configs: vec![FieldConfig { context, options }],
        }
    }

    /// The field kind this request creates
    pub fn kind(&self) -> FieldKind {
        O::KIND
    }

    /// The request's single config, when present.
    ///
    /// Constructors always install exactly one; payloads decoded from
    /// elsewhere normally carry one as well.
    pub fn config(&self) -> Option<&FieldConfig<O>> {
        self.configs.first()
    }

    /// Mutable access to the single config for pre-submission edits
    pub fn config_mut(&mut self) -> Option<&mut FieldConfig<O>> {
        self.configs.first_mut()
    }
}

/// Any case field creation request, tagged by kind.
///
/// This is the one place the kind is dynamic: decoding reads the `type`
/// discriminator and dispatches to the matching options codec. Everywhere
/// else the kind is fixed by the payload type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CreateCaseFieldRequest {
    String(CreateCaseField<StringOptions>),
    Integer(CreateCaseField<IntegerOptions>),
    Text(CreateCaseField<TextOptions>),
    Url(CreateCaseField<UrlOptions>),
    Checkbox(CreateCaseField<CheckboxOptions>),
    Dropdown(CreateCaseField<DropdownOptions>),
    User(CreateCaseField<UserOptions>),
    Date(CreateCaseField<DateOptions>),
    Milestone(CreateCaseField<MilestoneOptions>),
    Steps(CreateCaseField<StepsOptions>),
    Multiselect(CreateCaseField<MultiselectOptions>),
}

impl CreateCaseFieldRequest {
    /// The field kind this request creates
    pub fn kind(&self) -> FieldKind {
        match self {
            CreateCaseFieldRequest::String(_) => FieldKind::String,
            CreateCaseFieldRequest::Integer(_) => FieldKind::Integer,
            CreateCaseFieldRequest::Text(_) => FieldKind::Text,
            CreateCaseFieldRequest::Url(_) => FieldKind::Url,
            CreateCaseFieldRequest::Checkbox(_) => FieldKind::Checkbox,
            CreateCaseFieldRequest::Dropdown(_) => FieldKind::Dropdown,
            CreateCaseFieldRequest::User(_) => FieldKind::User,
            CreateCaseFieldRequest::Date(_) => FieldKind::Date,
            CreateCaseFieldRequest::Milestone(_) => FieldKind::Milestone,
            CreateCaseFieldRequest::Steps(_) => FieldKind::Steps,
            CreateCaseFieldRequest::Multiselect(_) => FieldKind::Multiselect,
        }
    }

    /// The request's label, whatever the kind
    pub fn label(&self) -> &str {
        match self {
            CreateCaseFieldRequest::String(field) => &field.label,
            CreateCaseFieldRequest::Integer(field) => &field.label,
            CreateCaseFieldRequest::Text(field) => &field.label,
            CreateCaseFieldRequest::Url(field) => &field.label,
            CreateCaseFieldRequest::Checkbox(field) => &field.label,
            CreateCaseFieldRequest::Dropdown(field) => &field.label,
            CreateCaseFieldRequest::User(field) => &field.label,
            CreateCaseFieldRequest::Date(field) => &field.label,
            CreateCaseFieldRequest::Milestone(field) => &field.label,
            CreateCaseFieldRequest::Steps(field) => &field.label,
            CreateCaseFieldRequest::Multiselect(field) => &field.label,
        }
    }

    /// The request's system name, whatever the kind
    pub fn name(&self) -> &str {
        match self {
            CreateCaseFieldRequest::String(field) => &field.name,
            CreateCaseFieldRequest::Integer(field) => &field.name,
            CreateCaseFieldRequest::Text(field) => &field.name,
            CreateCaseFieldRequest::Url(field) => &field.name,
            CreateCaseFieldRequest::Checkbox(field) => &field.name,
            CreateCaseFieldRequest::Dropdown(field) => &field.name,
            CreateCaseFieldRequest::User(field) => &field.name,
            CreateCaseFieldRequest::Date(field) => &field.name,
            CreateCaseFieldRequest::Milestone(field) => &field.name,
            CreateCaseFieldRequest::Steps(field) => &field.name,
            CreateCaseFieldRequest::Multiselect(field) => &field.name,
        }
    }

    /// Decodes a request from its submitted JSON form
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(json)?)
    }

    /// Encodes the request into the JSON object to submit
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl From<CreateCaseField<StringOptions>> for CreateCaseFieldRequest {
    fn from(field: CreateCaseField<StringOptions>) -> Self {
        CreateCaseFieldRequest::String(field)
    }
}

impl From<CreateCaseField<IntegerOptions>> for CreateCaseFieldRequest {
    fn from(field: CreateCaseField<IntegerOptions>) -> Self {
        CreateCaseFieldRequest::Integer(field)
    }
}

impl From<CreateCaseField<TextOptions>> for CreateCaseFieldRequest {
    fn from(field: CreateCaseField<TextOptions>) -> Self {
        CreateCaseFieldRequest::Text(field)
    }
}

impl From<CreateCaseField<UrlOptions>> for CreateCaseFieldRequest {
    fn from(field: CreateCaseField<UrlOptions>) -> Self {
        CreateCaseFieldRequest::Url(field)
    }
}

impl From<CreateCaseField<CheckboxOptions>> for CreateCaseFieldRequest {
    fn from(field: CreateCaseField<CheckboxOptions>) -> Self {
        CreateCaseFieldRequest::Checkbox(field)
    }
}

impl From<CreateCaseField<DropdownOptions>> for CreateCaseFieldRequest {
    fn from(field: CreateCaseField<DropdownOptions>) -> Self {
        CreateCaseFieldRequest::Dropdown(field)
    }
}

impl From<CreateCaseField<UserOptions>> for CreateCaseFieldRequest {
    fn from(field: CreateCaseField<UserOptions>) -> Self {
        CreateCaseFieldRequest::User(field)
    }
}

impl From<CreateCaseField<DateOptions>> for CreateCaseFieldRequest {
    fn from(field: CreateCaseField<DateOptions>) -> Self {
        CreateCaseFieldRequest::Date(field)
    }
}

impl From<CreateCaseField<MilestoneOptions>> for CreateCaseFieldRequest {
    fn from(field: CreateCaseField<MilestoneOptions>) -> Self {
        CreateCaseFieldRequest::Milestone(field)
    }
}

impl From<CreateCaseField<StepsOptions>> for CreateCaseFieldRequest {
    fn from(field: CreateCaseField<StepsOptions>) -> Self {
        CreateCaseFieldRequest::Steps(field)
    }
}

impl From<CreateCaseField<MultiselectOptions>> for CreateCaseFieldRequest {
    fn from(field: CreateCaseField<MultiselectOptions>) -> Self {
        CreateCaseFieldRequest::Multiselect(field)
    }
}
