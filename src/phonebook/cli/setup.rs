use clap::Parser;
use phonebook::config::PhonebookConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook", version)]
#[command(about = "Terminal phonebook backed by a CSV file", long_about = None)]
pub struct Cli {
    /// Backing CSV file
    #[arg(short, long, default_value = "phonebook.csv")]
    pub file: PathBuf,

    /// Records shown per table page
    #[arg(short = 'n', long, default_value_t = 10, value_parser = parse_page_size)]
    pub page_size: usize,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> PhonebookConfig {
        PhonebookConfig::default()
            .with_data_file(self.file.clone())
            .with_page_size(self.page_size)
    }
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("`{}` is not a page size", s)),
    }
}
