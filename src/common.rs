//! Common types shared by the writer: the Modified UTF-8 dialect selector
//! and the writer's construction-time configuration.
//!
//! # Examples
//!
//! ```
//! use wirecraft::common::{UtfVariant, WriterConfig};
//!
//! let config = WriterConfig::new(256, UtfVariant::FourByte).unwrap();
//! assert_eq!(config.capacity(), 256);
//! assert_eq!(config.utf_variant(), UtfVariant::FourByte);
//! ```

use crate::error::{Error, Result};

/// The default staging buffer capacity used by [`WriterConfig::default`].
///
/// Chosen to comfortably hold most strings and primitive runs without
/// forcing a drain on every write.
pub const DEFAULT_CAPACITY: usize = 8 * 1024;

/// The smallest staging buffer capacity the writer accepts.
///
/// Eight bytes is enough room for the widest primitive (`long`/`double`,
/// 8 bytes) without ever requiring a drain mid-encode.
pub const MIN_CAPACITY: usize = 8;

/// The longest Modified UTF-8 byte length a string may encode to.
///
/// The length prefix is a `u16`, so `65_535` is the largest representable
/// byte count.
pub const MAX_STRING_LEN: usize = u16::MAX as usize;

/// The largest number of entries the per-writer intern table may hold.
///
/// One id value, [`SENTINEL_ID`], is reserved and therefore never assigned,
/// leaving `65_535` usable ids.
pub const MAX_INTERN_ENTRIES: usize = u16::MAX as usize;

/// The reserved interned-string id meaning "not previously interned — a
/// literal string follows".
pub const SENTINEL_ID: u16 = u16::MAX;

/// Selects which Modified UTF-8 dialect a [`Writer`](crate::writer::Writer)
/// produces for supplementary (non-BMP) code points.
///
/// Both dialects agree on every code point below `U+10000`; they diverge
/// only in how they represent characters that require a UTF-16 surrogate
/// pair, i.e. `U+10000..=U+10FFFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtfVariant {
    /// The standard, `DataOutput`-mandated form: each surrogate half of a
    /// supplementary code point is encoded independently as its own 3-byte
    /// sequence. Any Modified UTF-8 reader can decode this form.
    ThreeByte,

    /// The bug-compatible form: a matched surrogate pair is coalesced into
    /// a single 4-byte UTF-8 sequence for the decoded code point. Retained
    /// for bit-exact compatibility with historical readers that diverged
    /// from the standard this way. Unmatched surrogates still fall back to
    /// the 3-byte form.
    FourByte,
}

impl Default for UtfVariant {
    /// The 4-byte variant is the default, matching the writers eligible for
    /// the process-wide recycling pool (see [`crate::pool`]).
    fn default() -> Self {
        UtfVariant::FourByte
    }
}

/// Construction-time configuration for a [`Writer`](crate::writer::Writer):
/// its staging buffer capacity and its Modified UTF-8 dialect.
///
/// Both settings are immutable for the lifetime of a bound writer; to
/// change them, construct a new writer (or see
/// [`Writer::set_output`](crate::writer::Writer::set_output), which rebinds
/// the sink but keeps the existing configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WriterConfig {
    capacity: usize,
    utf_variant: UtfVariant,
}

impl WriterConfig {
    /// Builds a configuration, rejecting a capacity below [`MIN_CAPACITY`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `capacity < 8`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wirecraft::common::{UtfVariant, WriterConfig};
    ///
    /// assert!(WriterConfig::new(4, UtfVariant::ThreeByte).is_err());
    /// assert!(WriterConfig::new(8, UtfVariant::ThreeByte).is_ok());
    /// ```
    pub fn new(capacity: usize, utf_variant: UtfVariant) -> Result<Self> {
        if capacity < MIN_CAPACITY {
            return Err(Error::InvalidConfig { capacity });
        }

        Ok(Self {
            capacity,
            utf_variant,
        })
    }

    /// The staging buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The selected Modified UTF-8 dialect.
    pub fn utf_variant(&self) -> UtfVariant {
        self.utf_variant
    }

    /// Whether this configuration matches the one and only shape the
    /// process-wide recycling pool accepts: default capacity, 4-byte
    /// variant. See [`crate::pool`].
    pub fn is_pool_eligible(&self) -> bool {
        self.capacity == DEFAULT_CAPACITY && self.utf_variant == UtfVariant::FourByte
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            utf_variant: UtfVariant::default(),
        }
    }
}
