// End-to-end: a record made of every primitive, written in an agreed order
// through one sink and read back in the same order from one source.

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, BufWriter, Read, Write};

    use bitpool_wire::{prelude::*, MessageEncoding};

    #[derive(Debug, Clone, PartialEq)]
    struct PoolMessage {
        id: Option<String>,
        subject: Option<Vec<u8>>,
        data: MetaBuffer,
        target: Option<String>,
        created: Timestamp,
        encoding: MessageEncoding,
        stream_number: i32,
        address_version: u16,
        difficulty: f64,
        has_delay: bool,
    }

    impl PoolMessage {
        fn sample() -> Self {
            Self {
                id: Some("7f3a9c".into()),
                subject: Some(b"BITPOOL::hello".to_vec()),
                data: MetaBuffer::new(Some(b"body".to_vec()), true),
                target: None,
                created: Timestamp::from_unix32(1_400_000_000),
                encoding: MessageEncoding::Simple,
                stream_number: 1,
                address_version: 4,
                difficulty: 1.5,
                has_delay: false,
            }
        }

        fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
            w.write_primitive(&self.id)?;
            w.write_primitive(&self.subject)?;
            w.write_primitive(&self.data)?;
            w.write_primitive(&self.target)?;
            w.write_primitive(&self.created)?;
            w.write_enum(self.encoding)?;
            w.write_primitive(&self.stream_number)?;
            w.write_primitive(&self.address_version)?;
            w.write_primitive(&self.difficulty)?;
            w.write_primitive(&self.has_delay)
        }

        fn read_from<R: Read + ?Sized>(r: &mut R) -> WireResult<Self> {
            Ok(Self {
                id: r.read_primitive()?,
                subject: r.read_primitive()?,
                data: r.read_primitive()?,
                target: r.read_primitive()?,
                created: r.read_primitive()?,
                encoding: r.read_enum()?,
                stream_number: r.read_primitive()?,
                address_version: r.read_primitive()?,
                difficulty: r.read_primitive()?,
                has_delay: r.read_primitive()?,
            })
        }
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    #[test]
    fn record_roundtrip_through_buffered_io() {
        init_tracing();
        let msg = PoolMessage::sample();

        let mut w = BufWriter::new(Vec::new());
        msg.write_to(&mut w).unwrap();
        msg.write_to(&mut w).unwrap();
        let wire = w.into_inner().unwrap();

        let mut r = BufReader::new(&wire[..]);
        assert_eq!(PoolMessage::read_from(&mut r).unwrap(), msg);
        assert_eq!(PoolMessage::read_from(&mut r).unwrap(), msg);
        assert!(matches!(PoolMessage::read_from(&mut r), Err(WireError::UnexpectedEndOfInput)));
    }

    #[test]
    fn every_strict_prefix_is_truncation() {
        init_tracing();
        let mut wire = Vec::new();
        PoolMessage::sample().write_to(&mut wire).unwrap();

        for cut in 0..wire.len() {
            let err = PoolMessage::read_from(&mut &wire[..cut]).unwrap_err();
            assert!(err.is_truncation(), "cut at {cut}: {err:?}");
        }
    }

    /// Yields one byte per call and reports `Interrupted` in between.
    struct Trickle<'a> {
        data: &'a [u8],
        interrupt: bool,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "again"));
            }
            match self.data.split_first() {
                Some((b, rest)) if !buf.is_empty() => {
                    buf[0] = *b;
                    self.data = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    #[test]
    fn short_and_interrupted_reads_are_tolerated() {
        let mut wire = Vec::new();
        PoolMessage::sample().write_to(&mut wire).unwrap();
        let mut src = Trickle { data: &wire, interrupt: false };
        assert_eq!(PoolMessage::read_from(&mut src).unwrap(), PoolMessage::sample());
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_errors_pass_through_unchanged() {
        let err = FailingSink.write_primitive(&42u64).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(err.to_string(), "closed");
    }

    struct FailingSource;

    impl Read for FailingSource {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    #[test]
    fn source_errors_other_than_eof_are_io() {
        match FailingSource.read_primitive::<u32>() {
            Err(WireError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::ConnectionReset),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
