//! Shared helpers.

pub mod encoding;

pub use encoding::{decode_prompt_bytes, read_prompt};
