//! # lognet-core
//!
//! Entities and the in-memory log registry for the lognet logging service.
//!
//! This crate provides:
//!
//! - [`LogEntry`] — A submitted log record, as it travels on the wire
//! - [`Log`] — The rendered, server-side form of an accepted entry
//! - [`LogLevel`] — Conventional severity names (advisory, not enforced)
//! - [`ApiSettings`] — Shared ping/log path configuration
//! - [`Registry`] — Per-identifier log store with a bounded pending queue
//!
//! ## Example
//!
//! ```rust
//! use lognet_core::{LogEntry, Registry};
//!
//! let registry = Registry::default();
//! let rendered = registry.record(LogEntry {
//!     id: "svc1".to_string(),
//!     timestamp: "2024-01-01T00:00:00".to_string(),
//!     level: "INFO".to_string(),
//!     message: "boot".to_string(),
//! });
//! assert!(rendered.ends_with("[INFO] boot"));
//! assert_eq!(registry.retrieve("svc1").len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod registry;
pub mod types;

// Re-export main types
pub use error::{RegistryError, Result};
pub use registry::{Registry, RegistryConfig};
pub use types::{ApiSettings, Log, LogEntry, LogLevel};
