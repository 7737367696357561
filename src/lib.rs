//! prompt-gauge: count prompt tokens against a model tokenizer
//!
//! The library exposes the analyzer and the tokenizer capability so other
//! backends can be plugged in; the `prompt-gauge` binary wraps them in a CLI.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod domain;
pub mod render;
pub mod tokenize;
pub mod utils;

pub use analyze::{analyze, AnalyzeError};
pub use domain::{AnalysisRequest, AnalysisResult, RequestError, Suggestion};
pub use tokenize::{
    tokenize, tokenize_with_encoding, TiktokenProvider, TokenCount, TokenizeError, Tokenizer,
    TokenizerProvider,
};
