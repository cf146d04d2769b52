use crate::error::{PhonebookError, Result};
use std::path::PathBuf;

const DEFAULT_DATA_FILE: &str = "phonebook.csv";
const DEFAULT_PAGE_SIZE: usize = 10;

/// Runtime configuration, passed to the store and the session at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Backing CSV file, relative paths resolve against the working directory
    pub data_file: PathBuf,

    /// Records shown per table page
    pub page_size: usize,
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PhonebookConfig {
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(PhonebookError::Config(
                "page size must be at least 1".to_string(),
            ));
        }
        if self.data_file.as_os_str().is_empty() {
            return Err(PhonebookError::Config(
                "data file path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PhonebookConfig::default();
        assert_eq!(config.data_file, PathBuf::from("phonebook.csv"));
        assert_eq!(config.page_size, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = PhonebookConfig::default()
            .with_data_file("/tmp/contacts.csv")
            .with_page_size(25);
        assert_eq!(config.data_file, PathBuf::from("/tmp/contacts.csv"));
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = PhonebookConfig::default().with_page_size(0);
        assert!(matches!(config.validate(), Err(PhonebookError::Config(_))));
    }

    #[test]
    fn test_empty_path_rejected() {
        let config = PhonebookConfig::default().with_data_file("");
        assert!(matches!(config.validate(), Err(PhonebookError::Config(_))));
    }
}
