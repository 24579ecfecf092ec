//! formbench core: shared data model, error types, and the audit sink.
//!
//! This crate defines the contracts shared by the server and the load
//! generator: the form-submission payload, the error surface with its stable
//! client-facing codes, and the append-only audit log collaborator. It carries
//! no HTTP or runtime dependencies so both binaries can reuse it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `FormbenchError`/`Result` so the server
//! process does not crash on malformed input or a sick log sink.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod audit;
pub mod error;
pub mod form;

/// Shared result type.
pub use error::{FormbenchError, Result};
