//! The per-writer string interning table.
//!
//! Assigns small, insertion-ordered 16-bit ids to strings as they are
//! first written, so later occurrences of the same string can be emitted
//! as a two-byte reference instead of being re-encoded in full. Modeled
//! on the builder/id-table split used by string-interning tables
//! elsewhere in the ecosystem (e.g. a profiling event stream's string
//! table), adapted to a fixed `u16` id space with one reserved sentinel.

use rustc_hash::FxHashMap;

use crate::common::{MAX_INTERN_ENTRIES, SENTINEL_ID};

/// The outcome of looking a string up in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternLookup {
    /// The string was already interned under this id.
    Known(u16),
    /// The string is new; the `bool` is whether it was assigned a fresh id
    /// (`true`) or the table is full and it must be written as a bare
    /// literal, uninserted (`false`).
    Fresh { inserted: bool },
}

/// An insertion-ordered string → id table, capped at
/// [`MAX_INTERN_ENTRIES`] entries.
///
/// Ids are assigned densely starting at 0 in first-write order. The value
/// [`SENTINEL_ID`] is never assigned, so a reader can always distinguish a
/// reference from a "literal follows" marker.
#[derive(Debug, Default)]
pub struct InternTable {
    ids: FxHashMap<String, u16>,
}

impl InternTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            ids: FxHashMap::default(),
        }
    }

    /// Looks up `s`, assigning it a fresh id as a side effect if it is new
    /// and the table has room.
    ///
    /// This single entry point mirrors the writer's actual access
    /// pattern — every lookup is immediately followed by "insert if
    /// fresh" — so there is no separate `insert` call a caller could
    /// invoke out of order.
    pub fn lookup_or_insert(&mut self, s: &str) -> InternLookup {
        if let Some(&id) = self.ids.get(s) {
            return InternLookup::Known(id);
        }

        if self.ids.len() >= MAX_INTERN_ENTRIES {
            return InternLookup::Fresh { inserted: false };
        }

        let next_id = self.ids.len() as u16;
        debug_assert_ne!(next_id, SENTINEL_ID);
        self.ids.insert(s.to_owned(), next_id);
        InternLookup::Fresh { inserted: true }
    }

    /// The number of interned entries.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Drops every entry, as happens on [`Writer::set_output`](crate::writer::Writer::set_output).
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_is_fresh_and_inserted() {
        let mut table = InternTable::new();
        assert_eq!(
            table.lookup_or_insert("x"),
            InternLookup::Fresh { inserted: true }
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn repeat_occurrence_is_known() {
        let mut table = InternTable::new();
        table.lookup_or_insert("x");
        assert_eq!(table.lookup_or_insert("x"), InternLookup::Known(0));
    }

    #[test]
    fn ids_assigned_in_insertion_order() {
        let mut table = InternTable::new();
        table.lookup_or_insert("x");
        table.lookup_or_insert("y");
        assert_eq!(table.lookup_or_insert("x"), InternLookup::Known(0));
        assert_eq!(table.lookup_or_insert("y"), InternLookup::Known(1));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut table = InternTable::new();
        table.lookup_or_insert("x");
        table.clear();
        assert!(table.is_empty());
        assert_eq!(
            table.lookup_or_insert("x"),
            InternLookup::Fresh { inserted: true }
        );
    }

    #[test]
    fn full_table_reports_uninserted() {
        let mut table = InternTable::new();
        for i in 0..MAX_INTERN_ENTRIES {
            table.lookup_or_insert(&i.to_string());
        }
        assert_eq!(table.len(), MAX_INTERN_ENTRIES);
        assert_eq!(
            table.lookup_or_insert("novel"),
            InternLookup::Fresh { inserted: false }
        );
        assert_eq!(table.len(), MAX_INTERN_ENTRIES);
    }
}
