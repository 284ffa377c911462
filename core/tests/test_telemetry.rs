#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use bitpool_wire::prelude::*;
    use bitpool_wire::telemetry::{CountingSink, CountingSource, WireCounters, WireSnapshot};

    // # ✅ 1. Counting wrappers see exactly the encoded bytes
    #[test]
    fn sink_and_source_count_the_same_bytes() {
        let mut sink = CountingSink::new(Vec::new());
        sink.write_primitive(&300u32).unwrap(); // 2 bytes
        sink.write_primitive("abc").unwrap(); // 1 + 3
        sink.write_meta(None, false).unwrap(); // 1
        sink.flush().unwrap();

        assert_eq!(sink.get_ref().len(), 7);
        let (wire, written) = sink.into_inner();
        assert_eq!(written.bytes_written, 7);
        assert_eq!(written.write_calls, 4); // prefix and payload are separate writes

        let mut source = CountingSource::new(&wire[..]);
        assert_eq!(source.read_primitive::<u32>().unwrap(), 300);
        assert_eq!(source.read_primitive::<Option<String>>().unwrap().as_deref(), Some("abc"));
        assert!(source.read_meta().unwrap().is_absent());
        assert_eq!(source.counters().bytes_read, 7);
    }

    // # ✅ 2. Merging
    #[test]
    fn counters_merge() {
        let mut a = WireCounters::default();
        a.add_write(10);
        a.add_read(4);

        let mut b = WireCounters::default();
        b.add_write(5);

        a += b.clone();
        assert_eq!(a.bytes_written, 15);
        assert_eq!(a.write_calls, 2);
        assert_eq!(a.total_bytes(), 19);

        b.merge(&a);
        assert_eq!(b.bytes_written, 20);
        assert_eq!(b.read_calls, 1);
    }

    // # ✅ 3. Snapshots
    #[test]
    fn snapshot_throughput() {
        let mut c = WireCounters::default();
        c.add_write(500);
        c.add_write(300);
        c.add_read(200);

        let snap = WireSnapshot::capture(&c, Duration::from_millis(500));
        assert_eq!(snap.throughput_bytes_per_sec, 2000.0);
        assert_eq!(snap.avg_write_size(), 400.0);

        let idle = WireSnapshot::capture(&WireCounters::default(), Duration::ZERO);
        assert_eq!(idle.throughput_bytes_per_sec, 0.0);
        assert_eq!(idle.avg_write_size(), 0.0);
    }

    #[test]
    fn snapshot_serde_roundtrip() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let mut c = WireCounters::default();
        c.add_read(64);
        let snap = WireSnapshot::capture(&c, Duration::from_secs(2));
        snap.log();

        let json = serde_json::to_string(&snap).unwrap();
        let back: WireSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
