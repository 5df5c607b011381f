//! # Axum Helpers
//!
//! Shared HTTP plumbing for the product services.
//!
//! - **[`errors`]**: `AppError` and the `{status_code, message}` envelope
//! - **[`extractors`]**: `ValidatedJson` and `QueryParams`, rejecting through `AppError`
//! - **[`server`]**: router assembly, health checks, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, ErrorResponse};
pub use extractors::{QueryParams, ValidatedJson};
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};
