//! Console adapter: turns typed lines into the plain values the command layer takes.

use phonebook::api::RecordEdit;
use phonebook::error::{PhonebookError, Result};
use phonebook::model::{Field, Record};
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and reads one line without its line ending.
    /// End of input is an error: every prompt needs an answer.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PhonebookError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Asks for every field in header order. Empty answers are kept as empty fields.
    pub fn ask_record(&mut self) -> Result<Record> {
        let mut record = Record::default();
        for field in Field::ALL {
            let value = self.ask(&format!("{}: ", field.label()))?;
            record.set(field, value);
        }
        Ok(record)
    }

    /// Asks for every field, showing the current value. Blank answers keep it.
    pub fn ask_edit(&mut self, current: &Record) -> Result<RecordEdit> {
        let mut edit = RecordEdit::new();
        for field in Field::ALL {
            let value = self.ask(&format!("{} ({}): ", field.label(), current.get(field)))?;
            edit = edit.set(field, value);
        }
        Ok(edit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_strips_line_endings_only() {
        let mut c = console("  spaced  \r\nnext\n");
        assert_eq!(c.ask("> ").unwrap(), "  spaced  ");
        assert_eq!(c.ask("> ").unwrap(), "next");
        assert_eq!(String::from_utf8(c.into_output()).unwrap(), "> > ");
    }

    #[test]
    fn ask_accepts_last_line_without_newline() {
        let mut c = console("4");
        assert_eq!(c.ask(">>> ").unwrap(), "4");
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut c = console("");
        assert!(matches!(c.ask(">>> "), Err(PhonebookError::InputClosed)));
    }

    #[test]
    fn ask_record_prompts_each_label_in_order() {
        let mut c = console("Smith\nJohn\n\nAcme Inc\n555-1\n555-2\n");
        let record = c.ask_record().unwrap();
        assert_eq!(
            record.into_fields(),
            ["Smith", "John", "", "Acme Inc", "555-1", "555-2"].map(String::from)
        );
        let prompts = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(
            prompts,
            "Surname: First Name: Patronymic: Organization: Work Phone: Personal Phone: "
        );
    }

    #[test]
    fn ask_edit_shows_current_values() {
        let current = Record::from_fields(
            ["Smith", "John", "", "Acme", "1", "2"].map(String::from),
        );
        let mut c = console("\nJack\n\n\n\n\n");
        let edit = c.ask_edit(&current).unwrap();
        assert_eq!(edit.replacement(Field::FirstName), Some("Jack"));
        assert_eq!(edit.replacement(Field::Surname), None);

        let prompts = String::from_utf8(c.into_output()).unwrap();
        assert!(prompts.starts_with("Surname (Smith): First Name (John): Patronymic (): "));
    }

    #[test]
    fn ask_record_fails_when_input_runs_out() {
        let mut c = console("Smith\nJohn\n");
        assert!(matches!(c.ask_record(), Err(PhonebookError::InputClosed)));
    }
}
