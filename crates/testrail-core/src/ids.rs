//! Identifier aliases for server-assigned ids.
//!
//! Every resource is keyed by an integer id except plan entries, which the
//! server keys by GUID strings.

pub type CaseFieldId = u64;
pub type CaseId = u64;
pub type CaseTypeId = u64;
pub type ConfigurationGroupId = u64;
pub type ConfigurationId = u64;
pub type MilestoneId = u64;
pub type PlanId = u64;
/// Plan entries are the one resource keyed by GUID rather than integer.
pub type PlanEntryId = String;
pub type PriorityId = u64;
pub type ProjectId = u64;
pub type ResultId = u64;
pub type RoleId = u64;
pub type RunId = u64;
pub type SectionId = u64;
pub type StatusId = u64;
pub type SuiteId = u64;
pub type TemplateId = u64;
pub type TestId = u64;
pub type UserId = u64;
