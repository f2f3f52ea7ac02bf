//! Output formatting functions.
//!
//! `json` renders machine-readable output for `--format json`; `pretty`
//! renders the human-readable text for `--format pretty`.

pub mod json;
pub mod pretty;
