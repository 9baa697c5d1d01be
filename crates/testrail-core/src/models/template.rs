use serde::{Deserialize, Serialize};

use crate::ids::TemplateId;

/// Template defining which fields a case or result shows
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    pub is_default: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_a_template() {
        let template: Template = serde_json::from_value(json!({
            "id": 1,
            "name": "Test Case (Steps)",
            "is_default": false,
        }))
        .unwrap();
        assert_eq!(template.name, "Test Case (Steps)");
        assert!(!template.is_default);
    }
}
