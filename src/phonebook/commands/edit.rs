use crate::commands::{CmdMessage, CmdResult, RecordEdit};
use crate::error::{PhonebookError, Result};
use crate::index::slot_for;
use crate::model::{Field, Record};
use crate::store::DataStore;
use tracing::debug;

/// Parses the record number typed at the edit prompt.
pub fn parse_position(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| PhonebookError::InvalidRecordNumber(trimmed.to_string()))
}

/// Fails with `RecordOutOfRange` unless `position` addresses an existing record.
pub fn check_position(records: &[Record], position: usize) -> Result<usize> {
    slot_for(position, records.len()).ok_or(PhonebookError::RecordOutOfRange {
        position,
        len: records.len(),
    })
}

pub fn run<S: DataStore>(
    store: &mut S,
    records: &mut [Record],
    position: usize,
    changes: &RecordEdit,
) -> Result<CmdResult> {
    let slot = check_position(records, position)?;

    let previous = records[slot].clone();
    for field in Field::ALL {
        if let Some(value) = changes.replacement(field) {
            records[slot].set(field, value.to_string());
        }
    }

    if let Err(e) = store.save(records) {
        records[slot] = previous;
        return Err(e);
    }
    debug!(position, "record updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Record updated"));
    Ok(result)
}
