//! # wirecraft
//!
//! **wirecraft** is a buffered, big-endian binary data writer compatible
//! with the classical "Java `DataOutput` / Modified UTF-8" wire encoding.
//! It writes fixed-width primitives and length-prefixed strings to any
//! byte sink, with optional per-writer string interning for workloads
//! that repeat the same strings often (schema names, symbol tables,
//! protocol field names).
//!
//! ## Goals
//!
//! - **Fixed wire format.** No framing, no header, no versioning: the
//!   bytes on the wire are exactly the concatenation of each write call's
//!   encoding, in call order.
//! - **Bit-exact Modified UTF-8.** Both the standard 3-byte form and the
//!   bug-compatible 4-byte form (for readers whose supplementary-code-point
//!   handling diverged from the standard) are first-class.
//! - **Predictable buffering.** A fixed-capacity staging buffer drains to
//!   the sink when full; oversized strings spill through a one-shot
//!   transient buffer rather than growing the staging buffer.
//! - **Recyclable writers.** An optional single-slot, process-wide pool
//!   lets hot paths reuse a writer's staging buffer instead of
//!   reallocating on every bind.
//!
//! ## Main features
//!
//! #### Writing primitives and strings
//!
//! ```rust
//! use wirecraft::writer::Writer;
//!
//! let mut writer = Writer::new(Vec::new());
//! writer.write_int(0x01020304)?;
//! writer.write_utf("hello")?;
//! writer.flush()?;
//!
//! let bytes = writer.sink_ref().unwrap();
//! assert_eq!(&bytes[0..4], &[0x01, 0x02, 0x03, 0x04]);
//! assert_eq!(&bytes[4..6], &[0x00, 0x05]); // length prefix
//! # Ok::<(), wirecraft::error::Error>(())
//! ```
//!
//! #### Interning repeated strings
//!
//! ```rust
//! use wirecraft::writer::Writer;
//!
//! let mut writer = Writer::new(Vec::new());
//! writer.write_interned_utf("example.Field")?;
//! writer.write_interned_utf("example.Field")?; // now a 2-byte reference
//! writer.flush()?;
//! # Ok::<(), wirecraft::error::Error>(())
//! ```
//!
//! #### Choosing a Modified UTF-8 variant
//!
//! ```rust
//! use wirecraft::common::{UtfVariant, WriterConfig};
//! use wirecraft::writer::Writer;
//!
//! let config = WriterConfig::new(4096, UtfVariant::ThreeByte)?;
//! let mut writer = Writer::with_config(Vec::new(), config);
//! writer.write_utf("\u{1F600}")?; // surrogate pair, split into two 3-byte sequences
//! # Ok::<(), wirecraft::error::Error>(())
//! ```
//!
//! ## Recycling writers
//!
//! [`pool::WriterPool`] offers best-effort recycling for writers built
//! with the default configuration. See its documentation for the
//! single-slot semantics.
//!
//! ## Getting Started
//!
//! ```toml
//! [dependencies]
//! wirecraft = "0.1.0"
//! ```
//!
//! ## Non-goals
//!
//! Random-access rewriting of already-written bytes, little-endian
//! layout, variable-length integer encodings, compression, checksums,
//! and concurrent use of a single writer from multiple threads are all
//! out of scope; callers serialize access to a writer themselves.
//!
//! ---

////////////////////////////////////////////////////////////////////////////////

pub mod common;
pub mod error;
pub mod pool;
pub mod sink;
pub mod writer;
