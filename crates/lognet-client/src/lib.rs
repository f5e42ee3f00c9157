//! # lognet-client
//!
//! Client for the lognet logging service.
//!
//! Construction doubles as a reachability check: [`Client::connect`] pings
//! the service and fails with a connectivity error unless the ping
//! classifies as success. Every call afterwards is single-shot — no
//! retries, no backoff — and resolves to an [`Outcome`]: `Success` for a
//! 2xx status, `Failure` carrying the status and body otherwise.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lognet_client::{Client, ClientConfig};
//! use lognet_core::LogLevel;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lognet_client::ClientError> {
//!     let client = Client::connect("svc1", "http://localhost:8000", ClientConfig::default())
//!         .await?;
//!     let outcome = client.log("service started", LogLevel::Info).await?;
//!     assert!(outcome.is_success());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod outcome;

// Re-export main types
pub use client::{Client, ClientConfig};
pub use error::{ClientError, Result};
pub use outcome::{FailureResponse, Outcome};
