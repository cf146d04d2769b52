//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the phonebook lives. The whole record
//! sequence is read once with [`DataStore::load`] and written back in full with
//! [`DataStore::save`] after every mutation; there is no partial update.
//!
//! ## Implementations
//!
//! - [`csv_file::CsvStore`]: production storage in a single CSV file
//!   - one record per line, six columns, no header row
//!   - saves go through a temporary sibling file and a rename
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - no persistence, counts saves so tests can assert the file was not touched

use crate::error::Result;
use crate::model::Record;

pub mod csv_file;
pub mod memory;

/// Abstract interface for phonebook persistence.
pub trait DataStore {
    /// Read every record, in file order. A missing backing file is an empty phonebook.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the stored phonebook with `records`
    fn save(&mut self, records: &[Record]) -> Result<()>;
}
