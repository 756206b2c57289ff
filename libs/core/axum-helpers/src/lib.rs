//! # Axum Helpers
//!
//! Shared HTTP plumbing for the inventory API.
//!
//! ## Modules
//!
//! - **[`errors`]**: `AppError` and the `{ "error", "timestamp" }` response body
//! - **[`extractors`]**: numeric id path parameter, JSON body with uniform rejections
//! - **[`server`]**: router assembly (docs, CORS, tracing), health, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, cors::CorsConfig, server::ServerConfig};
//!
//! let router = create_router::<ApiDoc>(api_routes, &CorsConfig::default())?
//!     .merge(health_router(app_info!()));
//! create_production_app(router, &ServerConfig::default(), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{IdPath, JsonBody};
pub use server::{create_production_app, create_router, health_router};
