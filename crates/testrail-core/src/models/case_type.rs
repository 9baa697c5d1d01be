use serde::{Deserialize, Serialize};

use crate::ids::CaseTypeId;

/// Case type, e.g. "Functional" or "Regression"
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaseType {
    pub id: CaseTypeId,
    pub name: String,
    pub is_default: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_a_case_type() {
        let case_type: CaseType =
            serde_json::from_value(json!({"id": 6, "name": "Other", "is_default": true})).unwrap();
        assert_eq!(case_type.name, "Other");
    }
}
