//! dynacrud - generic CRUD adapter for DynamoDB tables.
//!
//! The [`RecordRepository`](dynacrud_core::storage::RecordRepository) trait is
//! implemented by the backends in [`storage`]; the `dynacrud` binary wraps them
//! in a small CLI.

pub mod cli;
pub mod config;
pub mod output;
pub mod storage;

pub use config::Config;
pub use dynacrud_core::storage::{RecordRepository, RepositoryError};
pub use dynacrud_core::{Record, Value};
