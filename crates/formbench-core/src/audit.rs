//! Append-only audit sink.
//!
//! Every handled request produces exactly one audit line:
//! `<RFC3339 UTC timestamp, millisecond precision> - <event>\n`.
//! Lines are never mutated or deleted, and concurrent `record` calls must not
//! interleave bytes within a line.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};

use crate::error::{FormbenchError, Result};

/// Injected logging collaborator. The server owns exactly one sink for its
/// lifetime; handlers call `record` once per request.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Append one event as a full line. Must be atomic at line granularity.
    async fn record(&self, event: &str) -> Result<()>;
}

/// Format one audit line from an already-rendered timestamp.
pub fn format_line(timestamp: &str, event: &str) -> String {
    format!("{timestamp} - {event}\n")
}

/// Current UTC time as RFC 3339 with millisecond precision and `Z` suffix,
/// e.g. `2026-08-29T12:34:56.789Z`.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// File-backed sink. Opened once in append/create mode; the handle lives for
/// the process lifetime and is released on drop.
///
/// Each line is written with a single `write_all` under a mutex, so parallel
/// appends land as whole lines. Writes are tiny and hit the page cache, so a
/// blocking mutex inside the async trait is acceptable at this scale.
pub struct FileAuditSink {
    file: Mutex<File>,
}

impl FileAuditSink {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                FormbenchError::LogWrite(format!("open {} failed: {e}", path.display()))
            })?;
        Ok(Self { file: Mutex::new(file) })
    }
}

#[async_trait]
impl AuditSink for FileAuditSink {
    async fn record(&self, event: &str) -> Result<()> {
        let line = format_line(&now_iso8601(), event);
        let mut file = self
            .file
            .lock()
            .map_err(|_| FormbenchError::Internal("audit sink mutex poisoned".into()))?;
        file.write_all(line.as_bytes())
            .map_err(|e| FormbenchError::LogWrite(format!("append failed: {e}")))
    }
}

/// In-memory sink for tests and embedding. Stores fully formatted lines.
#[derive(Default)]
pub struct MemoryAuditSink {
    lines: Mutex<Vec<String>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded lines, in append order.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl AuditSink for MemoryAuditSink {
    async fn record(&self, event: &str) -> Result<()> {
        let line = format_line(&now_iso8601(), event);
        self.lines
            .lock()
            .map_err(|_| FormbenchError::Internal("audit sink mutex poisoned".into()))?
            .push(line);
        Ok(())
    }
}
