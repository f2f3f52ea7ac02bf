//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of
//! [`RecordRepository`](dynacrud_core::storage::RecordRepository) using
//! `aws-sdk-dynamodb`. Each collection maps to a table keyed on the string
//! attribute `id`.

mod client;
mod conversions;
mod error;
mod repository;

pub use client::create_client;
pub use repository::DynamoDbRepository;
