//! A single-slot, process-wide recycling cell for [`Writer`](crate::writer::Writer)
//! instances.
//!
//! Constructing a writer allocates a staging buffer; for hot paths that
//! bind a writer, use it briefly, and release it, recycling that
//! allocation is worth a best-effort cache. The pool intentionally stops
//! at one slot: "best-effort recycling," not a resource guarantee. A
//! `put` against an occupied slot, or a writer whose configuration
//! doesn't match the pool's single accepted shape (default capacity, the
//! 4-byte Modified UTF-8 variant), simply discards the incoming writer.
//!
//! Callers instantiate one `static WriterPool<S>` per sink type `S` they
//! want pooling for; the pool has no notion of "the" process-wide pool,
//! since the sink type must be fixed for the slot to be usefully typed.

use std::sync::Mutex;

use crate::sink::Sink;
use crate::writer::Writer;

/// A process-wide, single-slot recycling cell for `Writer<S>` instances.
///
/// # Examples
///
/// ```
/// use wirecraft::pool::WriterPool;
/// use wirecraft::writer::Writer;
///
/// static POOL: WriterPool<Vec<u8>> = WriterPool::new();
///
/// // Every writer `take()` can return is already released, i.e. sink-less
/// // (`put` only ever stores released writers). A caller must rebind it
/// // with `set_output` before writing; a fresh writer from `Writer::new`
/// // is already bound and needs no such call.
/// let mut writer = match POOL.take() {
///     Some(mut recycled) => {
///         recycled.set_output(Vec::new()).unwrap();
///         recycled
///     }
///     None => Writer::new(Vec::new()),
/// };
/// writer.write_int(1).unwrap();
/// writer.release().unwrap();
/// POOL.put(writer);
/// assert!(POOL.take().is_some());
/// ```
pub struct WriterPool<S: Sink> {
    slot: Mutex<Option<Writer<S>>>,
}

impl<S: Sink> WriterPool<S> {
    /// Creates an empty pool. Suitable for a `static` initializer.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Offers `writer` to the pool.
    ///
    /// Discards `writer` (dropping it) rather than accepting it if:
    /// - the slot is already occupied, or
    /// - `writer`'s configuration isn't the pool's single accepted shape
    ///   (default capacity, 4-byte variant) — see
    ///   [`WriterConfig::is_pool_eligible`](crate::common::WriterConfig::is_pool_eligible).
    ///
    /// The writer must already be [`release`](crate::writer::Writer::release)d;
    /// callers that pass a still-bound writer get it back discarded the
    /// same as any other ineligible writer, since a released writer is
    /// the only state this pool stores.
    pub fn put(&self, writer: Writer<S>) {
        if !writer.is_released() || !writer.config().is_pool_eligible() {
            tracing::trace!("discarding writer: not released or pool-ineligible configuration");
            return;
        }

        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if slot.is_some() {
            tracing::trace!("discarding writer: pool slot already occupied");
            return;
        }
        *slot = Some(writer);
    }

    /// Takes the pooled writer, if any.
    ///
    /// Returns `None` on an empty slot; the caller is expected to
    /// construct a fresh writer in that case.
    pub fn take(&self) -> Option<Writer<S>> {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        slot.take()
    }
}

impl<S: Sink> Default for WriterPool<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{UtfVariant, WriterConfig};

    fn pool_eligible_writer() -> Writer<Vec<u8>> {
        let config = WriterConfig::default();
        assert!(config.is_pool_eligible());
        let mut w = Writer::with_config(Vec::new(), config);
        w.release().unwrap();
        w
    }

    #[test]
    fn put_then_take_round_trips() {
        let pool: WriterPool<Vec<u8>> = WriterPool::new();
        pool.put(pool_eligible_writer());
        assert!(pool.take().is_some());
        assert!(pool.take().is_none());
    }

    #[test]
    fn second_put_discards_the_loser() {
        let pool: WriterPool<Vec<u8>> = WriterPool::new();
        pool.put(pool_eligible_writer());
        pool.put(pool_eligible_writer());
        assert!(pool.take().is_some());
        assert!(pool.take().is_none());
    }

    #[test]
    fn ineligible_configuration_never_enters_the_pool() {
        let pool: WriterPool<Vec<u8>> = WriterPool::new();
        let config = WriterConfig::new(64, UtfVariant::ThreeByte).unwrap();
        let mut w = Writer::with_config(Vec::new(), config);
        w.release().unwrap();
        pool.put(w);
        assert!(pool.take().is_none());
    }

    #[test]
    fn unreleased_writer_never_enters_the_pool() {
        let pool: WriterPool<Vec<u8>> = WriterPool::new();
        let w = Writer::with_config(Vec::new(), WriterConfig::default());
        pool.put(w);
        assert!(pool.take().is_none());
    }
}
