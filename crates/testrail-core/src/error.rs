use thiserror::Error;

use crate::fields::ItemsError;

/// Common errors for the TestRail data model
#[derive(Error, Debug)]
pub enum TestRailError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid items: {0}")]
    Items(#[from] ItemsError),

    #[error("Invalid custom field key: {0}")]
    CustomFieldKey(String),
}

pub type Result<T> = std::result::Result<T, TestRailError>;
