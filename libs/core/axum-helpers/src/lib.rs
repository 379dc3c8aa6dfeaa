//! # Axum Helpers
//!
//! Utilities shared by the HTTP surface of the workspace:
//!
//! - **[`errors`]**: the uniform `{status, data, error}` response envelope
//!   and the [`AppError`] type that renders into it
//! - **[`extractors`]**: UUID path parameters and validated JSON bodies
//!   that reject with envelope-shaped errors
//! - **[`server`]**: router assembly (tracing, CORS, Swagger UI, fallback)
//!   and server startup with graceful shutdown
//! - **[`health`]**: liveness endpoint reporting app name/version

pub mod errors;
pub mod extractors;
pub mod health;
pub mod server;

pub use errors::{not_found, ApiResponse, AppError};
pub use extractors::{ApiJson, UuidPath};
pub use health::{health_router, HealthResponse};
pub use server::{create_app, create_router, shutdown_signal};
