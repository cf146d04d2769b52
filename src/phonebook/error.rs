use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed row at line {line}: expected 6 fields, found {found}")]
    MalformedRow { line: u64, found: usize },

    #[error("Invalid record number: {position} (the phonebook has {len} records)")]
    RecordOutOfRange { position: usize, len: usize },

    #[error("Invalid record number: {0:?}")]
    InvalidRecordNumber(String),

    #[error("Input closed before a response was entered")]
    InputClosed,

    #[error("Config error: {0}")]
    Config(String),
}

impl PhonebookError {
    /// User mistakes that are reported and then ignored by the menu loop.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PhonebookError::RecordOutOfRange { .. } | PhonebookError::InvalidRecordNumber(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
