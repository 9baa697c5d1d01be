use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, TestRailError};

/// Key prefix every custom field value rides under
pub const CUSTOM_FIELD_PREFIX: &str = "custom_";

/// Dynamically named `custom_*` values attached to a server record.
///
/// The bag only ever holds keys carrying the [`CUSTOM_FIELD_PREFIX`] that are
/// not reserved by the owning record's typed properties. Writes violating
/// either rule are dropped without signal, mirroring the server's own
/// permissive handling of unknown keys; callers that want a definite answer
/// use [`try_insert`](Self::try_insert) instead.
#[derive(Debug, Clone, Default)]
pub struct CustomFields {
    fields: Map<String, Value>,
    omitted_keys: Vec<String>,
}

impl CustomFields {
    /// Builds a bag from `fields`, keeping only `custom_*` keys
    pub fn new(fields: Map<String, Value>) -> Self {
        Self::with_omitted_keys(fields, &[])
    }

    /// Builds a bag from `fields`, additionally dropping `omitted_keys`.
    ///
    /// Records that expose a handful of `custom_*` values as typed
    /// properties pass those keys here; the reserved set keeps applying to
    /// every later write.
    pub fn with_omitted_keys(fields: Map<String, Value>, omitted_keys: &[&str]) -> Self {
        let omitted_keys = omitted_keys.iter().map(|key| key.to_string()).collect();
        let mut bag = Self {
            fields: Map::new(),
            omitted_keys,
        };
        bag.set_fields(fields);
        bag
    }

    /// The backing map; always invariant-clean
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Replaces the backing map, re-filtering through the same rules
    pub fn set_fields(&mut self, fields: Map<String, Value>) {
        self.fields = fields
            .into_iter()
            .filter(|(key, _)| self.accepts(key))
            .collect();
    }

    /// Looks up one value by its full `custom_*` key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Inserts one value, silently dropping it when `key` lacks the prefix
    /// or is reserved
    pub fn insert(&mut self, key: String, value: Value) {
        if self.accepts(&key) {
            self.fields.insert(key, value);
        }
    }

    /// Inserts one value, rejecting invalid keys instead of dropping them
    pub fn try_insert(&mut self, key: String, value: Value) -> Result<()> {
        if !self.accepts(&key) {
            return Err(TestRailError::CustomFieldKey(key));
        }
        self.fields.insert(key, value);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    fn accepts(&self, key: &str) -> bool {
        key.starts_with(CUSTOM_FIELD_PREFIX) && !self.omitted_keys.iter().any(|k| k == key)
    }
}

/// Bags compare by their filtered contents; the reserved-key set is a
/// filtering parameter, not payload.
impl PartialEq for CustomFields {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Serialize for CustomFields {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CustomFields {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        Map::deserialize(deserializer).map(Self::new)
    }
}
