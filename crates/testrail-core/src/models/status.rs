use serde::{Deserialize, Serialize};

use crate::ids::StatusId;

/// Test status.
///
/// Ids 1 through 5 are the system statuses passed, blocked, untested,
/// retest and failed; installations may define up to seven more.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Status {
    pub id: StatusId,
    /// System name, e.g. "passed"
    pub name: String,
    /// Display label, e.g. "Passed"
    pub label: String,
    /// Colors as 24-bit RGB values
    pub color_dark: u32,
    pub color_medium: u32,
    pub color_bright: u32,
    pub is_system: bool,
    pub is_untested: bool,
    pub is_final: bool,
}
