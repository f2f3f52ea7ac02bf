//! In-memory storage backend implementation.
//!
//! Mirrors the DynamoDB backend's observable behavior (generated IDs,
//! create/update guards, single-call semantics) without any network access.

mod repository;

pub use repository::InMemoryRepository;
