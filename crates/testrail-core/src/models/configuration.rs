use serde::{Deserialize, Serialize};

use crate::ids::{ConfigurationGroupId, ConfigurationId, ProjectId};

/// Configuration group, e.g. "Browsers" or "Operating Systems"
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConfigurationGroup {
    pub id: ConfigurationGroupId,
    pub name: String,
    pub project_id: ProjectId,
    #[serde(default)]
    pub configs: Vec<Configuration>,
}

/// Single configuration within a group, e.g. "Chrome"
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Configuration {
    pub id: ConfigurationId,
    pub group_id: ConfigurationGroupId,
    pub name: String,
}

/// Data for creating a configuration group
#[derive(Debug, Clone, Serialize)]
pub struct NewConfigurationGroup {
    pub name: String,
}

/// Data for creating a configuration within a group
#[derive(Debug, Clone, Serialize)]
pub struct NewConfiguration {
    pub name: String,
}
