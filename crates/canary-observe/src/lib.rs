//! Logging setup shared by canary binaries.
//!
//! The engine crates only emit `tracing` events; this crate decides where they go.
mod logger;
pub use logger::*;
