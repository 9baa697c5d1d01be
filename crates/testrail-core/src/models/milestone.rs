use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::ids::{MilestoneId, ProjectId};

/// Milestone
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Milestone {
    pub id: MilestoneId,
    pub name: String,
    pub description: Option<String>,
    /// Scheduled start
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub start_on: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub started_on: Option<DateTime<Utc>>,
    /// Due date
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub due_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_started: bool,
    pub is_completed: bool,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub completed_on: Option<DateTime<Utc>>,
    /// Parent milestone for sub-milestones
    pub parent_id: Option<MilestoneId>,
    pub project_id: ProjectId,
    pub refs: Option<String>,
    pub url: Url,
    /// Sub-milestones; only populated when fetching a single milestone
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

/// Data for creating a new milestone
#[derive(Debug, Clone, Serialize)]
pub struct NewMilestone {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_on: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<MilestoneId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,
}
