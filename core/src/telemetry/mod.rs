//! telemetry/mod.rs
//! Byte accounting around any sink or source.
//!
//! Notes:
//! - The codec itself keeps no state; counting is opt-in by wrapping the stream.
//! - Counters are plain integers owned by one wrapper; merge them with `+=`.
//! - Snapshots are immutable and serializable for logs and reports.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
