//! In-memory log registry.
//!
//! This module provides:
//! - [`RegistryConfig`] — Capacity settings for the pending queue
//! - [`Registry`] — Thread-safe per-identifier log storage

use std::collections::VecDeque;
use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use indexmap::IndexMap;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::error::Result;
use crate::types::{Log, LogEntry};

/// Timestamp format used in exported file names.
const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Configuration for the log registry.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Maximum number of raw entries held in the pending queue.
    pub queue_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 1000,
        }
    }
}

/// All mutable registry state, guarded by a single lock so that every
/// operation is atomic and snapshots are never torn mid-append.
#[derive(Debug, Default)]
struct RegistryInner {
    /// Identifier -> rendered logs, in arrival order. Insertion order of
    /// the map itself is first-record order, which `get_services` exposes.
    logs: IndexMap<String, Vec<Log>>,
    /// Capacity-bounded buffer of raw submitted entries. Populated on every
    /// record but not exposed anywhere; see [`Registry::get_log_queue`].
    pending: VecDeque<LogEntry>,
}

/// Thread-safe, in-memory store of all logs, grouped per identifier.
///
/// One registry is created per service process and injected into the HTTP
/// boundary; it holds no persistent state. All operations are total over
/// their inputs — only [`Registry::export`] can fail, and only with a
/// filesystem error.
#[derive(Debug)]
pub struct Registry {
    config: RegistryConfig,
    inner: Mutex<RegistryInner>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl Registry {
    /// Creates a new registry with the given configuration.
    #[must_use]
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(RegistryInner::default()),
        }
    }

    /// Records a log entry and returns its rendered line.
    ///
    /// The rendered timestamp is the server's local receive time, not the
    /// client-supplied [`LogEntry::timestamp`]. The raw entry is also pushed
    /// into the pending queue; when the queue is at capacity the push is
    /// skipped so that recording never blocks or fails.
    pub fn record(&self, entry: LogEntry) -> String {
        let log = Log::new(entry.message.clone(), entry.level.clone(), None);
        let rendered = log.to_string();

        let mut inner = self.inner.lock();
        if inner.pending.len() < self.config.queue_capacity {
            inner.pending.push_back(entry.clone());
        } else {
            warn!(id = %entry.id, capacity = self.config.queue_capacity, "pending queue full, entry not queued");
        }
        inner.logs.entry(entry.id).or_default().push(log);
        drop(inner);

        debug!(line = %rendered, "recorded log entry");
        rendered
    }

    /// Returns all logs for an identifier, in arrival order.
    ///
    /// An unknown identifier yields an empty vector, never an error.
    #[must_use]
    pub fn retrieve(&self, id: &str) -> Vec<Log> {
        self.inner.lock().logs.get(id).cloned().unwrap_or_default()
    }

    /// Returns the known identifiers, in first-record order.
    #[must_use]
    pub fn get_services(&self) -> Vec<String> {
        self.inner.lock().logs.keys().cloned().collect()
    }

    /// Returns a snapshot of every identifier's logs.
    #[must_use]
    pub fn get_all(&self) -> IndexMap<String, Vec<Log>> {
        self.inner.lock().logs.clone()
    }

    /// Returns the readable view of the pending queue.
    ///
    /// Always empty: the queue is filled by [`Registry::record`] but has no
    /// draining path yet, and this accessor deliberately does not expose
    /// its contents. A future consumer would drain `pending` here.
    #[must_use]
    pub fn get_log_queue(&self) -> Vec<String> {
        Vec::new()
    }

    /// Removes every identifier and its logs.
    pub fn clear_logs(&self) {
        self.inner.lock().logs.clear();
        debug!("cleared all logs");
    }

    /// Removes the logs of one identifier; a no-op if it is unknown.
    pub fn clear_service_logs(&self, id: &str) {
        self.inner.lock().logs.shift_remove(id);
        debug!(id, "cleared service logs");
    }

    /// Discards the contents of the pending queue.
    pub fn clear_log_queue(&self) {
        self.inner.lock().pending.clear();
        debug!("cleared pending queue");
    }

    /// Writes every identifier's logs to `<id>_<YYYYmmdd_HHMMSS>.log` files
    /// inside `folder_path`, creating the folder if absent.
    ///
    /// One rendered line per log, newline-terminated, in arrival order.
    /// Existing files with the same name are overwritten; two exports for
    /// the same identifier within the same second collide.
    ///
    /// # Errors
    ///
    /// Returns an error if the folder cannot be created or a file write
    /// fails.
    pub fn export(&self, folder_path: impl AsRef<Path>) -> Result<()> {
        let folder = folder_path.as_ref();
        fs::create_dir_all(folder)?;

        // Snapshot under the lock, write outside it.
        let snapshot = self.get_all();
        let stamp = Local::now().format(EXPORT_TIMESTAMP_FORMAT).to_string();

        for (id, logs) in &snapshot {
            let file_path = folder.join(format!("{id}_{stamp}.log"));
            let mut file = fs::File::create(&file_path)?;
            for log in logs {
                writeln!(file, "{log}")?;
            }
            debug!(path = %file_path.display(), count = logs.len(), "exported logs");
        }

        Ok(())
    }

    /// Number of raw entries currently held in the pending queue.
    ///
    /// Diagnostic only; the queue contents stay unexposed. A future
    /// draining path would start here.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.inner.lock().pending.len()
    }
}
