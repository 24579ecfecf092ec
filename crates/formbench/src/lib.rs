//! Top-level facade crate for formbench.
//!
//! Re-exports core types and the server library so embedders can depend on a single crate.

pub mod core {
    pub use formbench_core::*;
}

pub mod server {
    pub use formbench_server::*;
}
