//! # Phonebook Architecture
//!
//! Phonebook keeps contact records (surname, first name, patronymic, organization,
//! work and personal phone) in a plain CSV file and edits them from an interactive
//! terminal menu. The library holds everything except the terminal: the binary is
//! a thin prompt-and-print client on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, table rendering, colored messages    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the in-memory Store for the whole session           │
//! │  - Thin dispatch to commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / edit / search / page, on already-collected input   │
//! │  - No I/O assumptions                                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load / save the whole sequence          │
//! │  - CsvStore (production), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record identity
//!
//! Records carry no id. A record is addressed by its 1-based position in the
//! phonebook, see [`index`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: add, edit, search and pagination logic
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Record` and the `Field` column order
//! - [`index`]: 1-based record positions
//! - [`config`]: Backing file path and page size
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
