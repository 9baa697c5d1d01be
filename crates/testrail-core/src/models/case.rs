use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::custom_fields::CustomFields;
use crate::ids::{
    CaseId, CaseTypeId, MilestoneId, PriorityId, SectionId, SuiteId, TemplateId, UserId,
};

/// Test case
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Case {
    pub id: CaseId,
    pub title: String,
    /// Owning section; absent when the project has no sections
    pub section_id: Option<SectionId>,
    pub template_id: TemplateId,
    pub type_id: CaseTypeId,
    pub priority_id: PriorityId,
    pub milestone_id: Option<MilestoneId>,
    /// External references, comma separated
    pub refs: Option<String>,
    pub created_by: UserId,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_on: DateTime<Utc>,
    pub updated_by: UserId,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_on: DateTime<Utc>,
    /// Estimate in the server's duration syntax, e.g. "30s" or "1m 45s"
    pub estimate: Option<String>,
    pub estimate_forecast: Option<String>,
    pub suite_id: Option<SuiteId>,
    /// Every `custom_*` value of the case
    #[serde(flatten)]
    pub custom_fields: CustomFields,
}

/// Data for creating a new case
#[derive(Debug, Clone, Serialize)]
pub struct NewCase {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<TemplateId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<CaseTypeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<PriorityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<MilestoneId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,
    /// Custom field values to set, keyed by their full `custom_*` names
    #[serde(flatten)]
    pub custom_fields: CustomFields,
}

impl NewCase {
    pub fn new(title: String) -> Self {
        Self {
            title,
            template_id: None,
            type_id: None,
            priority_id: None,
            estimate: None,
            milestone_id: None,
            refs: None,
            custom_fields: CustomFields::default(),
        }
    }
}
