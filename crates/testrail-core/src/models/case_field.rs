use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::fields::{FieldContext, FieldKind};
use crate::ids::{CaseFieldId, TemplateId};

/// Custom field definition as reported by the server.
///
/// The write side ([`CreateCaseFieldRequest`](crate::fields::CreateCaseFieldRequest))
/// is strictly typed. Read-side definitions keep the kind as the raw integer
/// code and the options as raw maps, since the server may report kinds and
/// option keys newer than this crate.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaseField {
    pub id: CaseFieldId,
    /// Integer kind code; see [`CaseField::kind`]
    pub type_id: u8,
    /// Field name without the `custom_` prefix
    pub name: String,
    /// Key the value rides under on cases and results, prefix included
    pub system_name: String,
    pub label: String,
    pub description: Option<String>,
    pub display_order: u32,
    #[serde(default)]
    pub include_all: bool,
    #[serde(default)]
    pub template_ids: Vec<TemplateId>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub configs: Vec<CaseFieldConfig>,
}

impl CaseField {
    /// The typed kind, when the code is one this crate knows
    pub fn kind(&self) -> Option<FieldKind> {
        FieldKind::from_type_id(self.type_id)
    }
}

/// One scoping/options entry of a reported field definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaseFieldConfig {
    /// Config GUID assigned by the server
    pub id: String,
    pub context: FieldContext,
    /// Kind-specific options; native JSON types on the read side
    #[serde(default)]
    pub options: Map<String, Value>,
}

/// Result field definitions share the case field shape
pub type ResultField = CaseField;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::selection::Selection;

    fn field_payload() -> serde_json::Value {
        json!({
            "id": 5,
            "type_id": 6,
            "name": "environment",
            "system_name": "custom_environment",
            "label": "Environment",
            "description": "Environment the case was verified on",
            "display_order": 3,
            "include_all": true,
            "template_ids": [],
            "is_active": true,
            "configs": [
                {
                    "id": "9d344bf1-6852-4341-b3e3-ae79b5a437ac",
                    "context": {"is_global": true, "project_ids": null},
                    "options": {
                        "is_required": false,
                        "default_value": "1",
                        "items": "1, Staging\n2, Production",
                    },
                },
            ],
        })
    }

    #[test]
    fn decodes_a_reported_definition() {
        let field: CaseField = serde_json::from_value(field_payload()).unwrap();
        assert_eq!(field.kind(), Some(FieldKind::Dropdown));
        assert_eq!(field.system_name, "custom_environment");

        let config = &field.configs[0];
        assert_eq!(config.context.project_selection(), Selection::All);
        assert_eq!(config.options["items"], json!("1, Staging\n2, Production"));
    }

    #[test]
    fn unknown_type_codes_stay_readable() {
        let mut value = field_payload();
        value["type_id"] = json!(19);
        let field: CaseField = serde_json::from_value(value).unwrap();
        assert_eq!(field.kind(), None);
        assert_eq!(field.type_id, 19);
    }

    #[test]
    fn missing_configs_default_to_empty() {
        let field: CaseField = serde_json::from_value(json!({
            "id": 1,
            "type_id": 3,
            "name": "notes",
            "system_name": "custom_notes",
            "label": "Notes",
            "description": null,
            "display_order": 1,
        }))
        .unwrap();
        assert!(field.configs.is_empty());
        assert!(!field.is_active);
    }
}
