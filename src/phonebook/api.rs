//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for phonebook operations, whatever UI sits in front of it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the Store**: the in-memory record sequence, loaded once in [`PhonebookApi::open`]
//!   and kept for the life of the session
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`, [`Page`])
//!
//! It does no console I/O and no formatting.
//!
//! ## Generic Over DataStore
//!
//! `PhonebookApi<S: DataStore>` is generic over the storage backend:
//! - Production: `PhonebookApi<CsvStore>`
//! - Testing: `PhonebookApi<InMemoryStore>`

use crate::commands;
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use crate::store::DataStore;
use std::num::NonZeroUsize;
use tracing::debug;

pub struct PhonebookApi<S: DataStore> {
    store: S,
    records: Vec<Record>,
    page_size: NonZeroUsize,
}

impl<S: DataStore> PhonebookApi<S> {
    /// Loads the phonebook from `store`. A page size of 0 is rejected before
    /// anything is read.
    pub fn open(store: S, page_size: usize) -> Result<Self> {
        let page_size = NonZeroUsize::new(page_size)
            .ok_or_else(|| PhonebookError::Config("page size must be at least 1".into()))?;
        let records = store.load()?;
        debug!(count = records.len(), page_size = page_size.get(), "phonebook opened");
        Ok(Self {
            store,
            records,
            page_size,
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn page(&self, number: usize) -> commands::list::Page {
        commands::list::page(&self.records, number, self.page_size)
    }

    /// The record at 1-based `position`, for showing current values at the edit prompts.
    pub fn record_at(&self, position: usize) -> Result<&Record> {
        let slot = commands::edit::check_position(&self.records, position)?;
        Ok(&self.records[slot])
    }

    pub fn add_record(&mut self, record: Record) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &mut self.records, record)
    }

    pub fn edit_record(
        &mut self,
        position: usize,
        changes: &commands::RecordEdit,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, &mut self.records, position, changes)
    }

    pub fn search(&self, term: &str) -> commands::CmdResult {
        commands::search::run(&self.records, term)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::edit::parse_position;
pub use crate::commands::list::Page;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, RecordEdit};
