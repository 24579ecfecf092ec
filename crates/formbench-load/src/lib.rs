//! formbench load generator library.
//!
//! Drives the three demo routes with a number of virtual clients for a fixed
//! duration, recording a structured check result per response. The binary
//! (`main.rs`) parses options, runs the clients, and prints the summary.

pub mod opts;
pub mod report;
pub mod scenario;
