//! Shared application state for the formbench server.
//!
//! Owns the three per-process resources: the parsed config, the landing
//! document (loaded once so `GET /` stays byte-for-byte stable), and the
//! audit sink. Startup errors are explicit (Result instead of panic).

use std::path::Path;
use std::sync::Arc;

use formbench_core::audit::{AuditSink, FileAuditSink};
use formbench_core::error::{FormbenchError, Result};

use crate::config::ServerConfig;
use crate::obs::metrics::ServerMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    index_html: String,
    audit: Arc<dyn AuditSink>,
    metrics: Arc<ServerMetrics>,
}

impl AppState {
    /// Build application state with a file-backed audit sink per the config.
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        let audit: Arc<dyn AuditSink> =
            Arc::new(FileAuditSink::open(Path::new(&cfg.server.log_file))?);
        Self::with_sink(cfg, audit)
    }

    /// Build application state around an injected sink (tests, embedding).
    pub fn with_sink(cfg: ServerConfig, audit: Arc<dyn AuditSink>) -> Result<Self> {
        let index_html = std::fs::read_to_string(&cfg.server.index_file).map_err(|e| {
            FormbenchError::BadConfig(format!(
                "read index file {} failed: {e}",
                cfg.server.index_file
            ))
        })?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                index_html,
                audit,
                metrics: Arc::new(ServerMetrics::default()),
            }),
        })
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    /// Landing document body, fixed for the process lifetime.
    pub fn index_html(&self) -> &str {
        &self.inner.index_html
    }

    pub fn audit(&self) -> &dyn AuditSink {
        self.inner.audit.as_ref()
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.inner.metrics
    }
}
