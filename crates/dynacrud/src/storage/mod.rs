//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! [`RecordRepository`](dynacrud_core::storage::RecordRepository) trait. The
//! backends are selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory` (default): process-local backend for tests and dry runs
//!
//! # Examples
//!
//! Build without the AWS SDK:
//! ```bash
//! cargo build -p dynacrud --no-default-features --features inmemory
//! ```

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory' feature. \
    Example: cargo build -p dynacrud --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;
