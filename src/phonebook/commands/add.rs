use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(
    store: &mut S,
    records: &mut Vec<Record>,
    record: Record,
) -> Result<CmdResult> {
    records.push(record);
    if let Err(e) = store.save(records) {
        records.pop();
        return Err(e);
    }
    debug!(position = records.len(), "record added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Record added"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{contact, StoreFixture};

    #[test]
    fn appends_at_last_position_and_saves() {
        let StoreFixture {
            mut store,
            mut records,
        } = StoreFixture::new().with_contacts(2);

        let new = contact("Smith", "Acme Inc");
        let result = run(&mut store, &mut records, new.clone()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[2], new);
        assert_eq!(store.saved().last(), Some(&new));
        assert_eq!(store.save_count(), 1);
        assert_eq!(result.messages[0].content, "Record added");
    }

    #[test]
    fn accepts_all_empty_fields() {
        let StoreFixture {
            mut store,
            mut records,
        } = StoreFixture::new();

        run(&mut store, &mut records, Record::default()).unwrap();
        assert_eq!(records, vec![Record::default()]);
        assert_eq!(store.saved(), &[Record::default()]);
    }

    #[test]
    fn allows_duplicates() {
        let StoreFixture {
            mut store,
            mut records,
        } = StoreFixture::new().with_contact("Smith", "Acme");

        run(&mut store, &mut records, contact("Smith", "Acme")).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], records[1]);
    }
}
