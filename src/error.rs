//! Error types for the wirecraft library.
//!
//! Every fallible operation in this crate returns [`Result<T>`], an alias
//! for `std::result::Result<T, Error>`. Each [`Error`] variant carries the
//! context a caller needs to react programmatically — sizes, counts, the
//! name of the offending legacy operation — rather than just a message.
//!
//! # Examples
//!
//! ```
//! use wirecraft::common::{UtfVariant, WriterConfig};
//! use wirecraft::error::Error;
//!
//! match WriterConfig::new(4, UtfVariant::ThreeByte) {
//!     Err(Error::InvalidConfig { capacity }) => assert_eq!(capacity, 4),
//!     _ => panic!("expected InvalidConfig"),
//! }
//! ```

use snafu::Snafu;
use std::io;

/// The error type for wirecraft operations.
///
/// See the error handling design in the crate specification: the writer
/// never retries, and a failed drain or flush leaves the sink's contents
/// indeterminate from the writer's point of view.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The underlying sink failed during a drain, flush, close, or
    /// large (spill) write.
    #[snafu(display("I/O failure writing to sink: {source}"))]
    IoFailure {
        /// The underlying I/O error.
        source: io::Error,
    },

    /// A string's Modified UTF-8 encoding exceeds the 65 535-byte limit
    /// the `u16` length prefix can represent.
    #[snafu(display(
        "string encodes to {len} Modified UTF-8 bytes, exceeding the 65535 byte limit"
    ))]
    StringTooLong {
        /// The string's actual encoded byte length.
        len: usize,
    },

    /// The legacy ASCII-only `writeBytes(String)` or UTF-16
    /// `writeChars(String)` operations were invoked. Use the Modified
    /// UTF-8 string writer instead.
    #[snafu(display("{operation} is not supported; use write_utf/write_interned_utf instead"))]
    Unsupported {
        /// The name of the unsupported legacy operation.
        operation: &'static str,
    },

    /// The requested staging buffer capacity is below the 8-byte minimum.
    #[snafu(display("buffer capacity {capacity} is below the minimum of 8 bytes"))]
    InvalidConfig {
        /// The rejected capacity.
        capacity: usize,
    },

    /// [`release`](crate::writer::Writer::release) was called while bytes
    /// were still pending in the staging buffer.
    #[snafu(display(
        "release() called with {pending} pending byte(s) staged; flush or drain first"
    ))]
    LingeringData {
        /// The number of bytes still pending at the time of the call.
        pending: usize,
    },

    /// A write operation was attempted after the writer was released.
    #[snafu(display("write attempted on a released writer"))]
    UseAfterRelease,
}

/// A specialized [`Result`](std::result::Result) for wirecraft operations.
pub type Result<T> = std::result::Result<T, Error>;
