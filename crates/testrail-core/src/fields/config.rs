use serde::{Deserialize, Serialize};

use crate::ids::ProjectId;
use crate::selection::Selection;

/// Project scoping shared by every field kind.
///
/// `project_ids` only matters when `is_global` is false; the server ignores
/// the list for global contexts and [`project_selection`](Self::project_selection)
/// does the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldContext {
    pub is_global: bool,
    pub project_ids: Option<Vec<ProjectId>>,
}

impl FieldContext {
    /// Context applying to every project
    pub fn global() -> Self {
        Self {
            is_global: true,
            project_ids: None,
        }
    }

    /// Context applying to exactly `project_ids`
    pub fn projects(project_ids: Vec<ProjectId>) -> Self {
        Self {
            is_global: false,
            project_ids: Some(project_ids),
        }
    }

    /// Which projects this context selects
    pub fn project_selection(&self) -> Selection<ProjectId> {
        if self.is_global {
            Selection::All
        } else {
            match &self.project_ids {
                Some(ids) => ids.iter().copied().collect(),
                None => Selection::None,
            }
        }
    }
}

/// One context/options pairing inside a field creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig<O> {
    pub context: FieldContext,
    pub options: O,
}
