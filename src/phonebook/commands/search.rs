use crate::commands::{CmdMessage, CmdResult};
use crate::index::index_records;
use crate::model::Record;

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Exact lookup: a record matches when its surname or organization equals `term`
/// once both sides are trimmed and lowercased. Substrings do not match.
pub fn matches(record: &Record, term: &str) -> bool {
    let term = normalize(term);
    normalize(&record.surname) == term || normalize(&record.organization) == term
}

pub fn run(records: &[Record], term: &str) -> CmdResult {
    let found: Vec<_> = index_records(records, 1)
        .into_iter()
        .filter(|dr| matches(&dr.record, term))
        .collect();

    let message = if found.is_empty() {
        CmdMessage::warning("No records found!")
    } else {
        CmdMessage::info(format!("Found {} record(s):", found.len()))
    };

    let mut result = CmdResult::default().with_listed_records(found);
    result.add_message(message);
    result
}
