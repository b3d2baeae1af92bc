//! The writer facade: the single entry point composing the staging
//! buffer, the primitive encoders, the Modified UTF-8 string writer, and
//! the interning table into one sequential API.
//!
//! Structurally this mirrors the buffer-plus-cursor design of a classic
//! byte writer — a fixed-capacity region, a cursor marking the pending
//! prefix, bounds-checked staging writes — generalized here from
//! random-access slice writes to a drain-on-demand writer over an
//! arbitrary [`Sink`].

pub mod intern;
pub mod utf8;

use snafu::ResultExt;

use crate::common::{WriterConfig, MAX_STRING_LEN, SENTINEL_ID};
use crate::error::{self, Error, Result};
use crate::sink::Sink;
use intern::{InternLookup, InternTable};
use utf8::EncodeOutcome;

/// A buffered, big-endian binary data writer.
///
/// `Writer<S>` stages primitive and string writes into an in-memory
/// buffer of fixed capacity, draining to the underlying [`Sink`] `S`
/// whenever the buffer fills or a value is too large to stage. It
/// produces a fixed wire format — no framing, no header — compatible
/// with the classical `DataOutput` / Modified UTF-8 encoding.
///
/// # Examples
///
/// ```
/// use wirecraft::writer::Writer;
///
/// let mut w = Writer::new(Vec::new());
/// w.write_int(0x01020304).unwrap();
/// w.write_boolean(true).unwrap();
/// w.flush().unwrap();
/// assert_eq!(w.sink_ref().unwrap(), &[0x01, 0x02, 0x03, 0x04, 0x01]);
/// ```
#[derive(Debug)]
pub struct Writer<S: Sink> {
    buf: Box<[u8]>,
    p: usize,
    sink: Option<S>,
    config: WriterConfig,
    intern: InternTable,
}

impl<S: Sink> Writer<S> {
    /// Creates a writer bound to `sink` with the default configuration
    /// (8 KiB staging buffer, 4-byte Modified UTF-8 variant).
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, WriterConfig::default())
    }

    /// Creates a writer bound to `sink` with an explicit configuration.
    ///
    /// `config` is already validated at construction
    /// ([`WriterConfig::new`]), so this cannot fail.
    pub fn with_config(sink: S, config: WriterConfig) -> Self {
        Self {
            buf: vec![0u8; config.capacity()].into_boxed_slice(),
            p: 0,
            sink: Some(sink),
            config,
            intern: InternTable::new(),
        }
    }

    /// This writer's configuration.
    pub fn config(&self) -> WriterConfig {
        self.config
    }

    /// Whether the writer has been [`release`](Self::release)d and no
    /// longer holds a sink.
    pub fn is_released(&self) -> bool {
        self.sink.is_none()
    }

    /// A reference to the bound sink, for tests and inspection.
    ///
    /// Returns `None` once the writer has been released.
    pub fn sink_ref(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    fn check_bound(&self) -> Result<()> {
        if self.sink.is_none() {
            return Err(Error::UseAfterRelease);
        }
        Ok(())
    }

    /// Guarantees at least `n` free bytes at the cursor, draining first
    /// if necessary.
    fn ensure(&mut self, n: usize) -> Result<()> {
        debug_assert!(
            n <= self.buf.len(),
            "ensure() called for more than the buffer can ever hold"
        );
        if self.buf.len() - self.p < n {
            self.drain()?;
        }
        Ok(())
    }

    /// Writes the pending prefix `[0, p)` to the sink and resets the
    /// cursor to zero. A no-op when nothing is pending.
    fn drain(&mut self) -> Result<()> {
        if self.p == 0 {
            return Ok(());
        }
        let sink = self.sink.as_mut().expect("drain requires a bound sink");
        sink.write_all(&self.buf[..self.p])
            .context(error::IoFailureSnafu)?;
        tracing::trace!(bytes = self.p, "drained staging buffer");
        self.p = 0;
        Ok(())
    }

    fn stage(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure(bytes.len())?;
        self.buf[self.p..self.p + bytes.len()].copy_from_slice(bytes);
        self.p += bytes.len();
        Ok(())
    }

    /// Writes an opaque byte range.
    ///
    /// Ranges at least as large as the staging capacity bypass staging
    /// entirely: the buffer is drained, then `bytes` is forwarded
    /// directly to the sink. Smaller ranges are staged normally.
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.check_bound()?;
        if bytes.len() >= self.buf.len() {
            self.drain()?;
            let sink = self.sink.as_mut().expect("checked above");
            sink.write_all(bytes).context(error::IoFailureSnafu)?;
            return Ok(());
        }
        self.stage(bytes)
    }

    /// Drains any pending bytes, then flushes the sink.
    pub fn flush(&mut self) -> Result<()> {
        self.check_bound()?;
        self.drain()?;
        let sink = self.sink.as_mut().expect("checked above");
        sink.flush().context(error::IoFailureSnafu)?;
        tracing::trace!("flushed sink");
        Ok(())
    }

    /// Drains any pending bytes, closes the sink, and transitions to the
    /// released state.
    pub fn close(&mut self) -> Result<()> {
        self.check_bound()?;
        self.drain()?;
        let mut sink = self.sink.take().expect("checked above");
        let result = sink.close().context(error::IoFailureSnafu);
        self.intern.clear();
        tracing::trace!("closed writer");
        result
    }

    /// Detaches the sink and clears the intern table, making this writer
    /// eligible for recycling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LingeringData`] if bytes are still staged; the
    /// caller must [`flush`](Self::flush) or drain them first. `release`
    /// never drains on the caller's behalf.
    pub fn release(&mut self) -> Result<()> {
        self.check_bound()?;
        if self.p != 0 {
            return Err(Error::LingeringData { pending: self.p });
        }
        self.sink = None;
        self.intern.clear();
        tracing::trace!("released writer");
        Ok(())
    }

    /// Rebinds this writer to `new_sink`, draining any bytes pending
    /// against the previous sink first, then resetting the cursor and
    /// intern table.
    ///
    /// Unlike [`release`](Self::release), this works whether or not the
    /// writer currently holds a sink, so a released writer can be
    /// recycled in place instead of going through [`Writer::new`].
    pub fn set_output(&mut self, new_sink: S) -> Result<()> {
        self.drain()?;
        self.sink = Some(new_sink);
        self.intern.clear();
        tracing::trace!("rebound writer to a new sink");
        Ok(())
    }

    /// Writes a single byte.
    pub fn write_byte(&mut self, v: u8) -> Result<()> {
        self.check_bound()?;
        self.stage(&[v])
    }

    /// Writes a boolean as `0x01` (true) or `0x00` (false).
    pub fn write_boolean(&mut self, v: bool) -> Result<()> {
        self.check_bound()?;
        self.stage(&[v as u8])
    }

    /// Writes a big-endian 16-bit signed integer.
    pub fn write_short(&mut self, v: i16) -> Result<()> {
        self.check_bound()?;
        self.stage(&v.to_be_bytes())
    }

    /// Writes a 16-bit character code, big-endian.
    ///
    /// Takes a `u16` directly: narrowing a wider value to 16 bits (the
    /// original `writeChar(int)`'s `v & 0xFFFF` truncation) is the
    /// caller's concern, expressed here by the parameter type rather
    /// than by masking inside the writer.
    pub fn write_char(&mut self, v: u16) -> Result<()> {
        self.check_bound()?;
        self.stage(&v.to_be_bytes())
    }

    /// Writes a big-endian 32-bit signed integer.
    pub fn write_int(&mut self, v: i32) -> Result<()> {
        self.check_bound()?;
        self.stage(&v.to_be_bytes())
    }

    /// Writes a big-endian 64-bit signed integer.
    pub fn write_long(&mut self, v: i64) -> Result<()> {
        self.check_bound()?;
        self.stage(&v.to_be_bytes())
    }

    /// Writes a 32-bit float as its IEEE-754 bit pattern, big-endian.
    pub fn write_float(&mut self, v: f32) -> Result<()> {
        self.check_bound()?;
        self.stage(&v.to_bits().to_be_bytes())
    }

    /// Writes a 64-bit float as its IEEE-754 bit pattern, big-endian.
    pub fn write_double(&mut self, v: f64) -> Result<()> {
        self.check_bound()?;
        self.stage(&v.to_bits().to_be_bytes())
    }

    /// The ASCII-only legacy string writer. Always fails.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`]; use [`write_utf`](Self::write_utf).
    pub fn write_bytes_legacy(&mut self, _s: &str) -> Result<()> {
        Err(Error::Unsupported {
            operation: "writeBytes",
        })
    }

    /// The UTF-16 legacy string writer. Always fails.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`]; use [`write_utf`](Self::write_utf).
    pub fn write_chars_legacy(&mut self, _s: &str) -> Result<()> {
        Err(Error::Unsupported {
            operation: "writeChars",
        })
    }

    /// Writes `s` as a `u16` big-endian byte length followed by its
    /// Modified UTF-8 encoding, under this writer's configured variant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StringTooLong`] if the encoded form exceeds
    /// 65 535 bytes.
    pub fn write_utf(&mut self, s: &str) -> Result<()> {
        self.check_bound()?;
        self.write_utf_payload(s)
    }

    /// Writes `s` through the per-writer intern table: a reference to a
    /// previously written string becomes a two-byte id; a novel string
    /// becomes the sentinel `0xFFFF` followed by the literal form (and is
    /// then itself remembered, unless the table is already full).
    pub fn write_interned_utf(&mut self, s: &str) -> Result<()> {
        self.check_bound()?;
        match self.intern.lookup_or_insert(s) {
            InternLookup::Known(id) => self.stage(&id.to_be_bytes()),
            InternLookup::Fresh { .. } => {
                self.stage(&SENTINEL_ID.to_be_bytes())?;
                self.write_utf_payload(s)
            }
        }
    }

    /// The shared body of [`write_utf`](Self::write_utf) and the literal
    /// branch of [`write_interned_utf`](Self::write_interned_utf):
    /// precomputes the encoded length, rejects anything over 65 535
    /// bytes, then chooses between the in-place and spill paths.
    fn write_utf_payload(&mut self, s: &str) -> Result<()> {
        let variant = self.config.utf_variant();
        let len = utf8::encoded_len(s, variant);
        if len > MAX_STRING_LEN {
            return Err(Error::StringTooLong { len });
        }
        let prefix = (len as u16).to_be_bytes();

        if 2 + len <= self.buf.len() {
            self.ensure(2 + len)?;
            self.buf[self.p..self.p + 2].copy_from_slice(&prefix);
            self.p += 2;
            match utf8::encode_into(s, variant, &mut self.buf[self.p..self.p + len]) {
                EncodeOutcome::Done(n) => debug_assert_eq!(n, len),
                EncodeOutcome::NeedCapacity(n) => {
                    unreachable!("encoded_len ({len}) and encode_into ({n}) disagreed")
                }
            }
            self.p += len;
            Ok(())
        } else {
            self.stage(&prefix)?;
            let mut spill = vec![0u8; len];
            match utf8::encode_into(s, variant, &mut spill) {
                EncodeOutcome::Done(n) => debug_assert_eq!(n, len),
                EncodeOutcome::NeedCapacity(n) => {
                    unreachable!("encoded_len ({len}) and encode_into ({n}) disagreed")
                }
            }
            self.write_raw(&spill)
        }
    }
}
