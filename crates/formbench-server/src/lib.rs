//! formbench server library entry.
//!
//! This crate wires the config loader, app state, route handlers, and
//! operational endpoints into the demo HTTP server. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod handlers;
pub mod obs;
pub mod ops;
pub mod router;
