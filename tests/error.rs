use wirecraft::error::Error;

#[test]
fn string_too_long_display() {
    let err = Error::StringTooLong { len: 70_000 };
    assert_eq!(
        err.to_string(),
        "string encodes to 70000 Modified UTF-8 bytes, exceeding the 65535 byte limit"
    );
}

#[test]
fn unsupported_display_names_the_operation() {
    let err = Error::Unsupported {
        operation: "writeBytes",
    };
    assert_eq!(
        err.to_string(),
        "writeBytes is not supported; use write_utf/write_interned_utf instead"
    );
}

#[test]
fn invalid_config_display() {
    let err = Error::InvalidConfig { capacity: 3 };
    assert_eq!(
        err.to_string(),
        "buffer capacity 3 is below the minimum of 8 bytes"
    );
}

#[test]
fn lingering_data_display() {
    let err = Error::LingeringData { pending: 5 };
    assert_eq!(
        err.to_string(),
        "release() called with 5 pending byte(s) staged; flush or drain first"
    );
}

#[test]
fn use_after_release_display() {
    let err = Error::UseAfterRelease;
    assert_eq!(err.to_string(), "write attempted on a released writer");
}

#[test]
fn io_failure_wraps_the_source_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let err = Error::IoFailure { source: io_err };
    assert!(err.to_string().contains("pipe closed"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn drain_failure_surfaces_as_io_failure_from_the_writer() {
    struct FailingSink;
    impl std::io::Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut w = wirecraft::writer::Writer::new(FailingSink);
    w.write_int(1).unwrap();
    match w.flush() {
        Err(Error::IoFailure { .. }) => {}
        other => panic!("expected IoFailure, got {other:?}"),
    }
}
