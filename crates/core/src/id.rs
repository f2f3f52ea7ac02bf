//! Record identifier generation.
//!
//! Identifiers look like `use_V1StGXR8_Z5jdHi6B-myT`: a short prefix taken from
//! the collection name, an underscore, and a random URL-safe suffix.

use rand::distr::StandardUniform;
use rand::Rng;

/// Number of collection-name characters used for the prefix.
pub const PREFIX_LEN: usize = 3;

/// Length of the random suffix.
pub const SUFFIX_LEN: usize = 21;

const ALPHABET: &[u8] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

/// Lowercased first [`PREFIX_LEN`] characters of `collection`.
pub fn id_prefix(collection: &str) -> String {
    collection
        .chars()
        .take(PREFIX_LEN)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Generate a fresh identifier for a record in `collection`.
pub fn generate_id(collection: &str) -> String {
    format!("{}_{}", id_prefix(collection), random_suffix())
}

// 256 is a multiple of the 64-symbol alphabet, so masking keeps the draw uniform.
fn random_suffix() -> String {
    rand::rng()
        .sample_iter::<u8, _>(StandardUniform)
        .take(SUFFIX_LEN)
        .map(|byte| char::from(ALPHABET[usize::from(byte & 63)]))
        .collect()
}
