use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::custom_fields::CustomFields;
use crate::ids::{ResultId, StatusId, TestId, UserId};

/// Result posted against a test
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TestResult {
    pub id: ResultId,
    pub test_id: TestId,
    /// Absent for comment-only or assignment-only results
    pub status_id: Option<StatusId>,
    pub created_by: UserId,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_on: DateTime<Utc>,
    pub assignedto_id: Option<UserId>,
    pub comment: Option<String>,
    /// Version or build the test was executed against
    pub version: Option<String>,
    /// Time taken, in the server's duration syntax
    pub elapsed: Option<String>,
    /// Defect references, comma separated
    pub defects: Option<String>,
    #[serde(flatten)]
    pub custom_fields: CustomFields,
}

/// Data for adding a result to a test
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<StatusId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defects: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignedto_id: Option<UserId>,
    /// Custom result field values, keyed by their full `custom_*` names
    #[serde(flatten)]
    pub custom_fields: CustomFields,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_a_posted_result() {
        let result: TestResult = serde_json::from_value(json!({
            "id": 1,
            "test_id": 100,
            "status_id": 5,
            "created_by": 1,
            "created_on": 1393851801,
            "assignedto_id": 1,
            "comment": "Failed on the second step",
            "version": "1.0 RC1",
            "elapsed": "5m",
            "defects": "TR-7, BR-19",
            "custom_step_results": [
                {"content": "Open dialog", "status_id": 1},
                {"content": "Check spacing", "status_id": 5},
            ],
        }))
        .unwrap();

        assert_eq!(result.status_id, Some(5));
        assert_eq!(result.defects.as_deref(), Some("TR-7, BR-19"));
        let steps = result.custom_fields.get("custom_step_results").unwrap();
        assert_eq!(steps[1]["status_id"], json!(5));
    }

    #[test]
    fn comment_only_results_have_no_status() {
        let result: TestResult = serde_json::from_value(json!({
            "id": 2,
            "test_id": 100,
            "status_id": null,
            "created_by": 1,
            "created_on": 1393851801,
            "assignedto_id": null,
            "comment": "Retest once the fix lands",
            "version": null,
            "elapsed": null,
            "defects": null,
        }))
        .unwrap();
        assert_eq!(result.status_id, None);
        assert!(result.custom_fields.is_empty());
    }

    #[test]
    fn new_result_merges_custom_fields_and_skips_unset_keys() {
        let mut request = NewResult {
            status_id: Some(1),
            comment: Some("Looks good".to_string()),
            ..NewResult::default()
        };
        request
            .custom_fields
            .insert("custom_environment".to_string(), json!(2));

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "status_id": 1,
                "comment": "Looks good",
                "custom_environment": 2,
            })
        );
    }
}
