//! Prompt analysis: token count, limit check and static advice.

use thiserror::Error;

use crate::domain::{AnalysisRequest, AnalysisResult, OptimizationTip, Suggestion};
use crate::tokenize::{tokenize_with_encoding, TokenizeError, TokenizerProvider};

/// Prompts longer than this always get the optimization tips.
pub const TIPS_THRESHOLD: usize = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Unable to estimate tokens: {0}")]
    UnableToEstimate(#[from] TokenizeError),
}

pub fn analyze(
    provider: &dyn TokenizerProvider,
    request: &AnalysisRequest,
) -> Result<AnalysisResult, AnalyzeError> {
    let tokens = tokenize_with_encoding(provider, &request.prompt, &request.model)?;
    let token_count = tokens.count;
    let max_tokens = request.max_tokens.get();
    tracing::debug!(
        model = %request.model,
        encoding = %tokens.encoding,
        token_count,
        max_tokens,
        "tokenized prompt"
    );

    Ok(AnalysisResult {
        model: request.model.clone(),
        encoding: tokens.encoding,
        token_count,
        max_tokens,
        within_limit: token_count <= max_tokens,
        suggestions: suggestions_for(token_count, max_tokens),
    })
}

pub fn suggestions_for(token_count: usize, max_tokens: usize) -> Vec<Suggestion> {
    let mut suggestions = if token_count > max_tokens {
        vec![Suggestion::LimitExceeded { max_tokens }, Suggestion::Shorten]
    } else {
        vec![Suggestion::WithinLimits]
    };

    if token_count > TIPS_THRESHOLD {
        suggestions.extend(OptimizationTip::ALL.into_iter().map(Suggestion::Tip));
    }
    suggestions
}
