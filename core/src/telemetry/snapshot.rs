//! telemetry/snapshot.rs
//!
//! Immutable view of counters at a point in time.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::telemetry::counters::WireCounters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireSnapshot {
    pub bytes_written: u64,
    pub bytes_read: u64,
    pub write_calls: u64,
    pub read_calls: u64,
    pub elapsed: Duration,
    /// `(bytes_written + bytes_read) / elapsed`, `0.0` when no time elapsed.
    pub throughput_bytes_per_sec: f64,
}

impl WireSnapshot {
    pub fn capture(counters: &WireCounters, elapsed: Duration) -> Self {
        let secs = elapsed.as_secs_f64();
        let throughput = if secs > 0.0 {
            counters.total_bytes() as f64 / secs
        } else {
            0.0
        };

        Self {
            bytes_written: counters.bytes_written,
            bytes_read: counters.bytes_read,
            write_calls: counters.write_calls,
            read_calls: counters.read_calls,
            elapsed,
            throughput_bytes_per_sec: throughput,
        }
    }

    pub fn since(counters: &WireCounters, started: Instant) -> Self {
        Self::capture(counters, started.elapsed())
    }

    /// Mean bytes per sink write call.
    pub fn avg_write_size(&self) -> f64 {
        if self.write_calls == 0 {
            0.0
        } else {
            self.bytes_written as f64 / self.write_calls as f64
        }
    }

    pub fn log(&self) {
        info!(
            bytes_written = self.bytes_written,
            bytes_read = self.bytes_read,
            elapsed_us = self.elapsed.as_micros() as u64,
            throughput = self.throughput_bytes_per_sec,
            "wire telemetry"
        );
    }
}
