//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`envelope`]**: `{ success, count, message, data }` response wrapper
//! - **[`errors`]**: `AppError` to HTTP response mapping with error codes
//! - **[`extractors`]**: JSON body extractor that reports failures as `AppError`
//! - **[`http`]**: CORS and security header middleware
//! - **[`server`]**: Router assembly, health endpoints, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(Router::new(), &config).await?;
//!     create_production_app(router, &config, Duration::from_secs(30), async {}).await
//! }
//! ```

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use envelope::{ApiMessage, ApiResponse};

pub use errors::{AppError, ErrorCode, ErrorResponse, validation_message};

pub use extractors::JsonBody;

pub use http::{create_cors_layer, create_permissive_cors_layer, security_headers};

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};
