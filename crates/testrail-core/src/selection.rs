use std::collections::HashSet;
use std::hash::Hash;

/// Tri-state answer to "which values does this apply to".
///
/// Derived from scoping data such as a field's project context: a global
/// scope selects everything, an explicit id list selects that set, and a
/// non-global scope without a list selects nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T: Eq + Hash> {
    /// Every value is selected.
    All,
    /// Exactly this set of values is selected.
    Some(HashSet<T>),
    /// No value is selected.
    None,
}

impl<T: Eq + Hash> Selection<T> {
    /// Whether `value` falls inside this selection.
    pub fn contains(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Some(values) => values.contains(value),
            Selection::None => false,
        }
    }
}

impl<T: Eq + Hash> FromIterator<T> for Selection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Selection::Some(iter.into_iter().collect())
    }
}
