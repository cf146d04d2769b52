use super::DataStore;
use crate::error::{PhonebookError, Result};
use crate::model::{Field, Record};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PhonebookError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "phonebook".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }

    fn write_rows(path: &Path, records: &[Record]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl DataStore for CsvStore {
    fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no backing file, starting empty");
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            if row.len() != Field::COUNT {
                let line = row.position().map(|p| p.line()).unwrap_or_default();
                return Err(PhonebookError::MalformedRow {
                    line,
                    found: row.len(),
                });
            }
            records.push(row.deserialize::<Record>(None)?);
        }

        debug!(path = %self.path.display(), count = records.len(), "loaded phonebook");
        Ok(records)
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent_dir()?;

        // Write the sibling first so a failed write never truncates the real file
        let tmp_path = self.tmp_path();
        if let Err(e) = Self::write_rows(&tmp_path, records) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        fs::rename(&tmp_path, &self.path).map_err(PhonebookError::Io)?;

        debug!(path = %self.path.display(), count = records.len(), "saved phonebook");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(surname: &str, organization: &str) -> Record {
        Record {
            surname: surname.to_string(),
            first_name: "Anna".to_string(),
            patronymic: String::new(),
            organization: organization.to_string(),
            work_phone: "100".to_string(),
            personal_phone: "200".to_string(),
        }
    }

    fn setup() -> (TempDir, CsvStore) {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path().join("phonebook.csv"));
        (dir, store)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_dir, store) = setup();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn empty_file_loads_empty() {
        let (_dir, store) = setup();
        fs::write(store.path(), "").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips_awkward_values() {
        let (_dir, mut store) = setup();
        let records = vec![
            record("Smith", "Acme, Inc"),
            record("O\"Brien", "Multi\nLine"),
            record("Иванов", "ООО Ромашка"),
            record("  padded  ", ""),
        ];
        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn save_writes_plain_rows_without_header() {
        let (_dir, mut store) = setup();
        store
            .save(&[record("Smith", "Acme Inc"), record("Jones", "A,B")])
            .unwrap();
        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            on_disk,
            "Smith,Anna,,Acme Inc,100,200\nJones,Anna,,\"A,B\",100,200\n"
        );
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let (_dir, mut store) = setup();
        store.save(&[record("A", "x"), record("B", "y")]).unwrap();
        store.save(&[record("C", "z")]).unwrap();
        assert_eq!(store.load().unwrap(), vec![record("C", "z")]);
    }

    #[test]
    fn save_leaves_no_tmp_files() {
        let (dir, mut store) = setup();
        store.save(&[record("Smith", "Acme")]).unwrap();
        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn save_creates_missing_parent_dir() {
        let dir = TempDir::new().unwrap();
        let mut store = CsvStore::new(dir.path().join("nested").join("book.csv"));
        store.save(&[record("Smith", "Acme")]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn short_row_aborts_load_with_line_number() {
        let (_dir, store) = setup();
        fs::write(
            store.path(),
            "Smith,John,,Acme,1,2\nJones,Mary,Acme\nBrown,Bob,,Acme,1,2\n",
        )
        .unwrap();
        match store.load() {
            Err(PhonebookError::MalformedRow { line, found }) => {
                assert_eq!(line, 2);
                assert_eq!(found, 3);
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn long_row_aborts_load() {
        let (_dir, store) = setup();
        fs::write(store.path(), "a,b,c,d,e,f,g\n").unwrap();
        assert!(matches!(
            store.load(),
            Err(PhonebookError::MalformedRow { line: 1, found: 7 })
        ));
    }
}
