//! Typed model for custom case field creation.
//!
//! The server accepts eleven field kinds, each with its own options payload.
//! Option values travel as strings whatever their native type: absent
//! scalars ride as `""`, dropdown defaults are 1-indexed on the wire but
//! 0-indexed here, and item lists use a numbered-line text form. The
//! [`CreateCaseFieldRequest`] union is the single place the kind is dynamic;
//! everywhere else it is pinned by the payload type.

pub mod config;
pub mod item_list;
pub mod kind;
pub mod options;
pub mod request;
mod wire;

pub use config::*;
pub use kind::*;
pub use options::*;
pub use request::*;
