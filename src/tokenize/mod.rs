//! Pluggable tokenizer capability.
//!
//! A [`TokenizerProvider`] maps a model identifier to a [`Tokenizer`] that
//! turns text into token ids. [`TiktokenProvider`] is the default backend; it
//! is feature-gated behind `tiktoken` and reports
//! [`TokenizeError::TokenizerUnavailable`] when the crate is built without it.

use thiserror::Error;

mod tiktoken;

pub use tiktoken::{known_models, TiktokenProvider};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("tokenizer backend unavailable: {reason}")]
    TokenizerUnavailable { reason: String },

    #[error("no tokenizer mapping for model '{model}'")]
    UnsupportedModel { model: String },
}

pub trait Tokenizer {
    fn encode(&self, text: &str) -> Vec<u32>;

    /// Name of the vocabulary behind this tokenizer, e.g. `cl100k_base`.
    fn encoding_name(&self) -> &str;

    fn count_tokens(&self, text: &str) -> usize {
        self.encode(text).len()
    }
}

pub trait TokenizerProvider {
    fn tokenizer_for(&self, model: &str) -> Result<Box<dyn Tokenizer>, TokenizeError>;
}

/// Token count of `prompt` plus the name of the encoding that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCount {
    pub count: usize,
    pub encoding: String,
}

/// Token count of `prompt` under the tokenizer registered for `model`.
pub fn tokenize(
    provider: &dyn TokenizerProvider,
    prompt: &str,
    model: &str,
) -> Result<usize, TokenizeError> {
    tokenize_with_encoding(provider, prompt, model).map(|tokens| tokens.count)
}

pub fn tokenize_with_encoding(
    provider: &dyn TokenizerProvider,
    prompt: &str,
    model: &str,
) -> Result<TokenCount, TokenizeError> {
    let tokenizer = provider.tokenizer_for(model)?;
    Ok(TokenCount {
        count: tokenizer.count_tokens(prompt),
        encoding: tokenizer.encoding_name().to_string(),
    })
}
