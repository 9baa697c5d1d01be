pub mod case;
pub mod case_field;
pub mod case_type;
pub mod configuration;
pub mod milestone;
pub mod plan;
pub mod priority;
pub mod project;
pub mod result;
pub mod run;
pub mod section;
pub mod status;
pub mod suite;
pub mod template;
pub mod user;

pub use case::*;
pub use case_field::*;
pub use case_type::*;
pub use configuration::*;
pub use milestone::*;
pub use plan::*;
pub use priority::*;
pub use project::*;
pub use result::*;
pub use run::*;
pub use section::*;
pub use status::*;
pub use suite::*;
pub use template::*;
pub use test::*;
pub use user::*;
