pub mod custom_fields;
pub mod error;
pub mod fields;
pub mod ids;
pub mod models;
pub mod selection;

pub use custom_fields::{CustomFields, CUSTOM_FIELD_PREFIX};
pub use error::{Result, TestRailError};
pub use fields::*;
pub use ids::*;
pub use models::*;
pub use selection::Selection;
