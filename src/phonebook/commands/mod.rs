use crate::index::DisplayRecord;
use crate::model::Field;

pub mod add;
pub mod edit;
pub mod list;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<DisplayRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }
}

/// Replacement values for an edit. `None` or an empty string keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordEdit {
    values: [Option<String>; Field::COUNT],
}

impl RecordEdit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an edit from raw answers in header order, as typed at the edit prompts.
    pub fn from_answers(answers: [String; Field::COUNT]) -> Self {
        Self {
            values: answers.map(Some),
        }
    }

    pub fn set(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values[field as usize] = Some(value.into());
        self
    }

    /// The replacement for `field`, if one was given and is non-empty.
    pub fn replacement(&self, field: Field) -> Option<&str> {
        self.values[field as usize]
            .as_deref()
            .filter(|v| !v.is_empty())
    }
}
