//! dynacrud_core - pure building blocks for the dynacrud adapter.
//!
//! Nothing in this crate performs I/O. Storage backends live in the
//! `dynacrud` crate and implement [`storage::RecordRepository`].

pub mod expression;
pub mod id;
pub mod record;
pub mod storage;

pub use record::{Record, Value, ID_FIELD};
