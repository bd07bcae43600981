//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! - **[`server`]**: router setup with OpenAPI docs, health checks, graceful shutdown
//! - **[`http`]**: CORS policy and security headers
//! - **[`errors`]**: `AppError` and the standard JSON error body with error codes
//! - **[`extractors`]**: id path, query and validated JSON extractors

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{ApiQuery, IdPath, ValidatedJson};
pub use http::{create_cors_layer, create_permissive_cors_layer, security_headers};
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};
