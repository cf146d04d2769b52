//! The interactive menu loop.
//!
//! Every cycle repaints page 1 of the table, shows the four actions and reads a
//! choice. Choices are matched exactly; anything else is reported and the menu
//! comes back. Only `4` leaves the loop. Running out of input is fatal.

use super::print::{write_message, write_messages};
use super::prompt::Console;
use super::render::{render_matches, render_table};
use phonebook::api::{parse_position, CmdMessage, PhonebookApi};
use phonebook::error::Result;
use phonebook::store::DataStore;
use std::io::{BufRead, Write};
use tracing::debug;

const MENU: &str = "Choose an action:\n1. Add record\n2. Edit record\n3. Search records\n4. Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Edit,
    Search,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Edit),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct Session<S: DataStore, R, W> {
    api: PhonebookApi<S>,
    console: Console<R, W>,
}

impl<S: DataStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(api: PhonebookApi<S>, console: Console<R, W>) -> Self {
        Self { api, console }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            let table = render_table(&self.api.page(1));
            let out = self.console.output();
            write!(out, "{}", table)?;
            write!(out, "{}", MENU)?;

            let choice = self.console.ask(">>> ")?;
            let outcome = match MenuChoice::parse(&choice) {
                Some(MenuChoice::Add) => self.add(),
                Some(MenuChoice::Edit) => self.edit(),
                Some(MenuChoice::Search) => self.search(),
                Some(MenuChoice::Exit) => {
                    debug!("exit requested");
                    return Ok(());
                }
                None => {
                    write_message(self.console.output(), &CmdMessage::error("Invalid choice"))?;
                    continue;
                }
            };

            match outcome {
                Err(e) if e.is_recoverable() => {
                    write_message(self.console.output(), &CmdMessage::error(e.to_string()))?;
                }
                other => other?,
            }
        }
    }

    fn add(&mut self) -> Result<()> {
        let record = self.console.ask_record()?;
        let result = self.api.add_record(record)?;
        write_messages(self.console.output(), &result.messages)?;
        Ok(())
    }

    fn edit(&mut self) -> Result<()> {
        let answer = self.console.ask("Enter record number: ")?;
        let position = parse_position(&answer)?;
        let current = self.api.record_at(position)?.clone();
        let changes = self.console.ask_edit(&current)?;
        let result = self.api.edit_record(position, &changes)?;
        write_messages(self.console.output(), &result.messages)?;
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        let term = self
            .console
            .ask("Enter surname or organization to search: ")?;
        let result = self.api.search(&term);
        let out = self.console.output();
        write_messages(out, &result.messages)?;
        write!(out, "{}", render_matches(&result.listed_records))?;
        Ok(())
    }

    #[cfg(test)]
    pub fn api(&self) -> &PhonebookApi<S> {
        &self.api
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (PhonebookApi<S>, Console<R, W>) {
        (self.api, self.console)
    }
}
