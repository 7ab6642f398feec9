//! An insertion-ordered collection of person records, unique by identifier.

use crate::{
    domain::{Person, RecordId},
    registry::Error,
};

/// Records of a single kind, kept in insertion order.
///
/// Lookups are a linear scan comparing identifiers for exact equality; the
/// first match wins.
#[derive(Debug)]
pub(crate) struct Roster<T> {
    records: Vec<T>,
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Person> Roster<T> {
    /// Finds the record with the given identifier.
    pub(crate) fn get(&self, id: &RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Appends a record to the end of the roster.
    ///
    /// The roster is left untouched if the identifier is already taken.
    pub(crate) fn insert(&mut self, record: T) -> Result<&T, Error> {
        if self.get(record.id()).is_some() {
            return Err(Error::duplicate::<T>(record.id()));
        }

        let index = self.records.len();
        self.records.push(record);
        Ok(&self.records[index])
    }

    /// Replaces the record with the given identifier.
    ///
    /// The old record is removed and the new one appended, so the replaced
    /// record moves to the end of the iteration order.
    pub(crate) fn replace(&mut self, id: &RecordId, details: T::Details) -> Result<&T, Error> {
        if self.get(id).is_none() {
            return Err(Error::not_found::<T>(id));
        }

        self.records.retain(|record| record.id() != id);

        let index = self.records.len();
        self.records.push(T::from_details(id.clone(), details));
        Ok(&self.records[index])
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.records
    }
}
