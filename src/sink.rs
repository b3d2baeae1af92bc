//! The byte sink contract: the external collaborator a [`Writer`](crate::writer::Writer)
//! drains into.
//!
//! The writer only ever needs three operations from its sink: a blocking
//! write of an exact byte range, a flush, and a close. Any `std::io::Write`
//! already provides the first two; [`Sink`] adds `close` and is blanket
//! implemented for every `W: Write` by treating close as a final flush,
//! since `std::io::Write` has no distinct close operation of its own.
//!
//! # Examples
//!
//! ```
//! use wirecraft::sink::Sink;
//!
//! let mut buf: Vec<u8> = Vec::new();
//! Sink::write_all(&mut buf, &[1, 2, 3]).unwrap();
//! Sink::flush(&mut buf).unwrap();
//! Sink::close(&mut buf).unwrap();
//! assert_eq!(buf, vec![1, 2, 3]);
//! ```

use std::io::{self, Write};

/// A sequential byte sink: accepts writes, can be flushed, and can be
/// closed.
///
/// This is the only external collaborator the writer depends on. Types
/// that already implement [`std::io::Write`] get this trait for free via
/// the blanket implementation below.
pub trait Sink {
    /// Writes the entire buffer to the sink, or fails.
    ///
    /// Implementations must write all of `buf` or return an error; short
    /// writes must not be exposed to the caller.
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()>;

    /// Flushes any sink-side buffering.
    fn flush(&mut self) -> io::Result<()>;

    /// Closes the sink. After this call the sink must not be written to
    /// again.
    fn close(&mut self) -> io::Result<()>;
}

impl<W: Write> Sink for W {
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        Write::write_all(self, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Write::flush(self)
    }

    fn close(&mut self) -> io::Result<()> {
        // `std::io::Write` has no distinct close; a final flush is the
        // closest equivalent. Sinks with true close semantics (e.g. a
        // `File`) should be dropped by the caller after this returns.
        Write::flush(self)
    }
}
