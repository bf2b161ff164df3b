//! Ordered, newest-first record collections.

use crate::record::{Record, next_id};

/// An ordered set of records of one type.
///
/// The canonical order is most-recent-first: [`insert`](Collection::insert)
/// prepends. Ids are unique as long as every record enters through
/// `insert` or through a snapshot that was itself produced by a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<R> {
    records: Vec<R>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> Collection<R> {
    /// Wrap an existing snapshot verbatim, keeping its order.
    pub fn from_records(records: Vec<R>) -> Self {
        Self { records }
    }

    /// All records in canonical order.
    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: u64) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Assign the next id to `draft`, prepend the resulting record and
    /// return a copy of it.
    ///
    /// Returns `None`, leaving the collection untouched, when the largest
    /// id is already `u64::MAX`.
    pub fn insert(&mut self, draft: R::Draft) -> Option<R> {
        let record = R::from_draft(next_id(&self.records)?, draft);
        self.records.insert(0, record.clone());
        Some(record)
    }

    /// Apply `f` to the record with the given id.
    ///
    /// Returns `false` and leaves the collection untouched when no record
    /// matches.
    pub fn update(&mut self, id: u64, f: impl FnOnce(&mut R)) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                f(record);
                true
            }
            None => false,
        }
    }
}
