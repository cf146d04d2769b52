//! Records have no stored id. While the phonebook is in memory a record is
//! addressed by its 1-based position in the sequence, which is what the table
//! shows and what edit asks for. Positions shift if the file is edited by hand
//! between runs.

use crate::model::Record;

/// A record paired with its 1-based position in the phonebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub position: usize,
    pub record: Record,
}

/// Pairs each record in `records` with its position, starting at `first_position`.
pub fn index_records<'a, I>(records: I, first_position: usize) -> Vec<DisplayRecord>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(offset, record)| DisplayRecord {
            position: first_position + offset,
            record: record.clone(),
        })
        .collect()
}

/// Converts a 1-based position into a vector index, if it addresses one of `len` records.
pub fn slot_for(position: usize, len: usize) -> Option<usize> {
    if position >= 1 && position <= len {
        Some(position - 1)
    } else {
        None
    }
}
