//! Output rendering for analysis results.

mod json;
mod text;

pub use json::{render_json, render_json_failure};
pub use text::{render_failure_text, render_text};
