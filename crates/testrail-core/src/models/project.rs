use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::ids::ProjectId;

/// TestRail project
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Announcement shown on the project overview
    pub announcement: Option<String>,
    #[serde(default)]
    pub show_announcement: bool,
    pub is_completed: bool,
    /// Completion timestamp
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub completed_on: Option<DateTime<Utc>>,
    /// Suite mode: 1 single suite, 2 single suite with baselines, 3 multiple
    /// suites
    pub suite_mode: u8,
    /// Link to the project in the web UI
    pub url: Url,
}

/// Data for creating a new project
#[derive(Debug, Clone, Serialize)]
pub struct NewProject {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_announcement: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite_mode: Option<u8>,
}
