use serde::{Deserialize, Serialize};

use crate::ids::{SectionId, SuiteId};

/// Section grouping cases within a suite
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Section {
    pub id: SectionId,
    /// Owning suite; absent on single-suite projects
    pub suite_id: Option<SuiteId>,
    pub name: String,
    pub description: Option<String>,
    /// Parent section for nested hierarchies
    pub parent_id: Option<SectionId>,
    pub depth: u32,
    pub display_order: u32,
}

/// Data for creating a new section
#[derive(Debug, Clone, Serialize)]
pub struct NewSection {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite_id: Option<SuiteId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<SectionId>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_a_nested_section() {
        let section: Section = serde_json::from_value(json!({
            "id": 2,
            "suite_id": 4,
            "name": "Login",
            "description": null,
            "parent_id": 1,
            "depth": 1,
            "display_order": 2,
        }))
        .unwrap();
        assert_eq!(section.parent_id, Some(1));
        assert_eq!(section.depth, 1);
    }

    #[test]
    fn new_section_keeps_only_set_fields() {
        let request = NewSection {
            name: "Checkout".to_string(),
            description: None,
            suite_id: Some(4),
            parent_id: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"name": "Checkout", "suite_id": 4})
        );
    }
}
