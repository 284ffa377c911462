//! telemetry/counters.rs
//! Mutable counters and the counting stream wrappers that feed them.

use std::io::{self, Read, Write};
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Bytes and calls observed on one sink/source.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCounters {
    pub bytes_written: u64,
    pub bytes_read: u64,
    pub write_calls: u64,
    pub read_calls: u64,
}

impl WireCounters {
    pub fn add_write(&mut self, n: usize) {
        self.write_calls += 1;
        self.bytes_written += n as u64;
    }

    pub fn add_read(&mut self, n: usize) {
        self.read_calls += 1;
        self.bytes_read += n as u64;
    }

    pub fn total_bytes(&self) -> u64 {
        self.bytes_written + self.bytes_read
    }

    pub fn merge(&mut self, other: &WireCounters) {
        self.bytes_written += other.bytes_written;
        self.bytes_read += other.bytes_read;
        self.write_calls += other.write_calls;
        self.read_calls += other.read_calls;
    }
}

impl AddAssign for WireCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

/// `Write` wrapper that counts accepted bytes.
#[derive(Debug)]
pub struct CountingSink<W> {
    inner: W,
    counters: WireCounters,
}

impl<W: Write> CountingSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, counters: WireCounters::default() }
    }

    pub fn counters(&self) -> &WireCounters {
        &self.counters
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> (W, WireCounters) {
        (self.inner, self.counters)
    }
}

impl<W: Write> Write for CountingSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.counters.add_write(n);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// `Read` wrapper that counts delivered bytes.
#[derive(Debug)]
pub struct CountingSource<R> {
    inner: R,
    counters: WireCounters,
}

impl<R: Read> CountingSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, counters: WireCounters::default() }
    }

    pub fn counters(&self) -> &WireCounters {
        &self.counters
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> (R, WireCounters) {
        (self.inner, self.counters)
    }
}

impl<R: Read> Read for CountingSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.counters.add_read(n);
        Ok(n)
    }
}
