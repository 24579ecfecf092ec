//! Lightweight in-process metrics (dependency-free).
//!
//! Minimal Prometheus-compatible metrics without external exporter crates.
//! Metrics are stored as atomics and rendered by the `/metrics` handler.

pub mod metrics;
