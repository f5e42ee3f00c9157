//! # lognet-server
//!
//! HTTP service boundary for the lognet logging service, built on axum.
//!
//! The boundary is thin: it translates inbound HTTP calls into
//! [`Registry`](lognet_core::Registry) operations and the results back into
//! JSON responses. The registry is injected at construction so tests can
//! run against a fresh one.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use lognet_core::Registry;
//! use lognet_server::{LoggingService, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = Arc::new(Registry::default());
//!     let service = LoggingService::new(ServerConfig::default(), registry);
//!     // service.serve().await.unwrap();
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/{ping_path}` | GET | Health check |
//! | `/{log_path}` | POST | Submit a log entry |
//! | `/services` | GET | Known identifiers |
//! | `/retrieve?id=` | GET | Logs for one identifier |
//! | `/get-all` | GET | Logs for every identifier |
//! | `/get-log-queue` | GET | Pending-queue view (always empty) |
//! | `/clear-logs` | DELETE | Drop everything |
//! | `/clear-service-logs?service_name=` | DELETE | Drop one identifier |
//! | `/clear-log-queue` | DELETE | Drop the pending queue |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

// Re-export main types
pub use config::ServerConfig;
pub use error::{ServiceError, ServiceResult};
pub use routes::create_router;
pub use server::LoggingService;
pub use state::ServiceState;
