use serde::{Deserialize, Serialize};

use crate::ids::PriorityId;

/// Case priority
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Priority {
    pub id: PriorityId,
    pub name: String,
    pub short_name: String,
    /// Sort position; higher is more urgent
    pub priority: u32,
    pub is_default: bool,
}
