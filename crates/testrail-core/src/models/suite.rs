use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::ids::{ProjectId, SuiteId};

/// Test suite within a project
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Suite {
    pub id: SuiteId,
    pub project_id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    /// Whether this is the default suite of a single-suite project
    #[serde(default)]
    pub is_master: bool,
    #[serde(default)]
    pub is_baseline: bool,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub completed_on: Option<DateTime<Utc>>,
    pub url: Url,
}

/// Data for creating a new suite
#[derive(Debug, Clone, Serialize)]
pub struct NewSuite {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
