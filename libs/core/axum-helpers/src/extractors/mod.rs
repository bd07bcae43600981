//! Custom extractors for Axum handlers.
//!
//! Each rejection is rendered through [`AppError`](crate::errors::AppError)
//! so clients always receive the standard JSON error body.

pub mod id_path;
pub mod query;
pub mod validated_json;

pub use id_path::IdPath;
pub use query::ApiQuery;
pub use validated_json::ValidatedJson;
