use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::ids::{
    CaseId, ConfigurationId, MilestoneId, PlanId, ProjectId, RunId, SuiteId, UserId,
};

/// Test run
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Run {
    pub id: RunId,
    /// Suite the run draws cases from; absent on single-suite projects
    pub suite_id: Option<SuiteId>,
    pub name: String,
    pub description: Option<String>,
    pub milestone_id: Option<MilestoneId>,
    pub assignedto_id: Option<UserId>,
    /// Whether the run includes every case of the suite
    pub include_all: bool,
    pub is_completed: bool,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub completed_on: Option<DateTime<Utc>>,
    /// Combined configuration name, e.g. "Chrome, Windows 10"
    pub config: Option<String>,
    #[serde(default)]
    pub config_ids: Vec<ConfigurationId>,
    pub passed_count: u32,
    pub blocked_count: u32,
    pub untested_count: u32,
    pub retest_count: u32,
    pub failed_count: u32,
    /// Counts for results in the five user-defined statuses
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
    /// Owning plan when the run was created through a plan entry
    pub plan_id: Option<PlanId>,
    pub created_by: UserId,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_on: DateTime<Utc>,
    pub url: Url,
}

/// Data for creating a new run
#[derive(Debug, Clone, Serialize)]
pub struct NewRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite_id: Option<SuiteId>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<MilestoneId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignedto_id: Option<UserId>,
    /// Include every case of the suite instead of the explicit `case_ids`
    pub include_all: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_ids: Option<Vec<CaseId>>,
}
