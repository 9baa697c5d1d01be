use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::run::Run;
use crate::ids::{
    CaseId, ConfigurationId, MilestoneId, PlanEntryId, PlanId, ProjectId, SuiteId, UserId,
};

/// Test plan
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Plan {
    pub id: PlanId,
    pub name: String,
    pub description: Option<String>,
    pub milestone_id: Option<MilestoneId>,
    pub assignedto_id: Option<UserId>,
    pub is_completed: bool,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub completed_on: Option<DateTime<Utc>>,
    pub passed_count: u32,
    pub blocked_count: u32,
    pub untested_count: u32,
    pub retest_count: u32,
    pub failed_count: u32,
    #[serde(default)]
    pub custom_status1_count: u32,
    #[serde(default)]
    pub custom_status2_count: u32,
    #[serde(default)]
    pub custom_status3_count: u32,
    #[serde(default)]
    pub custom_status4_count: u32,
    #[serde(default)]
    pub custom_status5_count: u32,
    #[serde(default)]
    pub custom_status6_count: u32,
    #[serde(default)]
    pub custom_status7_count: u32,
    pub project_id: ProjectId,
    pub created_by: UserId,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_on: DateTime<Utc>,
    pub url: Url,
    /// Entries with their runs; only populated when fetching a single plan
    #[serde(default)]
    pub entries: Vec<PlanEntry>,
}

/// Suite entry within a plan, grouping one run per configuration combination
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlanEntry {
    /// Entry GUID; plans are the one place the server keys by string
    pub id: PlanEntryId,
    pub suite_id: SuiteId,
    pub name: Option<String>,
    #[serde(default)]
    pub runs: Vec<Run>,
}

/// Data for creating a new plan
#[derive(Debug, Clone, Serialize)]
pub struct NewPlan {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<MilestoneId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<NewPlanEntry>,
}

/// Data for adding an entry to a plan
#[derive(Debug, Clone, Serialize)]
pub struct NewPlanEntry {
    pub suite_id: SuiteId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignedto_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_ids: Option<Vec<CaseId>>,
    /// Configuration combinations to spawn one run each for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_ids: Option<Vec<ConfigurationId>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_a_plan_with_entries() {
        // The full payload nests too deeply for a single json! expansion,
        // so the run is built separately.
        let run = json!({
            "id": 81,
            "suite_id": 4,
            "name": "File formats",
            "description": null,
            "milestone_id": 7,
            "assignedto_id": null,
            "include_all": true,
            "is_completed": false,
            "completed_on": null,
            "config": null,
            "config_ids": [],
            "passed_count": 1,
            "blocked_count": 2,
            "untested_count": 6,
            "retest_count": 0,
            "failed_count": 2,
            "project_id": 1,
            "plan_id": 80,
            "created_by": 1,
            "created_on": 1393845644,
            "url": "https://example.testrail.com/index.php?/runs/view/81",
        });
        let plan: Plan = serde_json::from_value(json!({
            "id": 80,
            "name": "System test",
            "description": null,
            "milestone_id": 7,
            "assignedto_id": null,
            "is_completed": false,
            "completed_on": null,
            "passed_count": 1,
            "blocked_count": 2,
            "untested_count": 6,
            "retest_count": 0,
            "failed_count": 2,
            "project_id": 1,
            "created_by": 1,
            "created_on": 1393845644,
            "url": "https://example.testrail.com/index.php?/plans/view/80",
            "entries": [
                {
                    "id": "3933d74b-4282-4c1f-be62-a641ab427063",
                    "suite_id": 4,
                    "name": "File formats",
                    "runs": [run],
                },
            ],
        }))
        .unwrap();

        assert_eq!(plan.entries.len(), 1);
        let entry = &plan.entries[0];
        assert_eq!(entry.id, "3933d74b-4282-4c1f-be62-a641ab427063");
        assert_eq!(entry.runs.len(), 1);
        assert_eq!(entry.runs[0].id, 81);
        assert_eq!(entry.runs[0].plan_id, Some(plan.id));
    }

    #[test]
    fn plan_listing_omits_entries() {
        let plan: Plan = serde_json::from_value(json!({
            "id": 81,
            "name": "Empty plan",
            "description": null,
            "milestone_id": null,
            "assignedto_id": null,
            "is_completed": false,
            "completed_on": null,
            "passed_count": 0,
            "blocked_count": 0,
            "untested_count": 0,
            "retest_count": 0,
            "failed_count": 0,
            "project_id": 1,
            "created_by": 1,
            "created_on": 1393845644,
            "url": "https://example.testrail.com/index.php?/plans/view/81",
        }))
        .unwrap();
        assert!(plan.entries.is_empty());
    }

    #[test]
    fn new_plan_entry_serializes_configuration_spread() {
        let request = NewPlan {
            name: "Browser spread".to_string(),
            description: None,
            milestone_id: Some(7),
            entries: vec![NewPlanEntry {
                suite_id: 4,
                name: None,
                assignedto_id: None,
                include_all: Some(true),
                case_ids: None,
                config_ids: Some(vec![1, 2]),
            }],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "name": "Browser spread",
                "milestone_id": 7,
                "entries": [
                    {"suite_id": 4, "include_all": true, "config_ids": [1, 2]},
                ],
            })
        );
    }
}
