//! Smoke test that the writer's ambient tracing events compile and run
//! under a real subscriber instead of only the default no-op one.

use wirecraft::common::{UtfVariant, WriterConfig};
use wirecraft::pool::WriterPool;
use wirecraft::writer::Writer;

#[test]
fn writer_lifecycle_runs_cleanly_under_an_active_tracing_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        // Undersized relative to the write below, so flush() must drain.
        let small = WriterConfig::new(8, UtfVariant::FourByte).unwrap();
        let mut w = Writer::with_config(Vec::new(), small);
        w.write_long(1).unwrap();
        w.write_byte(2).unwrap();
        w.flush().unwrap();
        w.set_output(Vec::new()).unwrap();
        w.release().unwrap();

        // Default configuration is pool-eligible; exercise put/take and
        // the contention-discard path, both of which trace at pool level.
        static POOL: WriterPool<Vec<u8>> = WriterPool::new();
        let mut eligible = Writer::new(Vec::new());
        eligible.release().unwrap();
        POOL.put(eligible);

        let mut second = Writer::new(Vec::new());
        second.release().unwrap();
        POOL.put(second); // discarded: slot already occupied

        assert!(POOL.take().is_some());
        assert!(POOL.take().is_none());
    });
}
