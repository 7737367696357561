//! Core data types shared by the analyzer, renderers and config layer.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::num::NonZeroUsize;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: usize = 1000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("max_tokens must be at least 1")]
    ZeroLimit,
}

/// A single prompt to analyze. Built once per invocation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub prompt: String,
    pub model: String,
    pub max_tokens: NonZeroUsize,
}

impl AnalysisRequest {
    pub fn new(
        prompt: impl Into<String>,
        model: impl Into<String>,
        max_tokens: usize,
    ) -> Result<Self, RequestError> {
        let max_tokens = NonZeroUsize::new(max_tokens).ok_or(RequestError::ZeroLimit)?;
        Ok(Self { prompt: prompt.into(), model: model.into(), max_tokens })
    }
}

/// Outcome of a successful analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub model: String,
    pub encoding: String,
    pub token_count: usize,
    pub max_tokens: usize,
    pub within_limit: bool,
    pub suggestions: Vec<Suggestion>,
}

impl AnalysisResult {
    pub fn status(&self) -> impl Iterator<Item = &Suggestion> {
        self.suggestions.iter().filter(|s| !s.is_tip())
    }

    pub fn tips(&self) -> impl Iterator<Item = &Suggestion> {
        self.suggestions.iter().filter(|s| s.is_tip())
    }
}

/// Advisory entry attached to an [`AnalysisResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    LimitExceeded { max_tokens: usize },
    Shorten,
    WithinLimits,
    Tip(OptimizationTip),
}

impl Suggestion {
    pub fn is_tip(&self) -> bool {
        matches!(self, Suggestion::Tip(_))
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::LimitExceeded { max_tokens } => {
                write!(f, "Warning: Prompt exceeds the maximum token limit ({}).", max_tokens)
            }
            Suggestion::Shorten => f.write_str("Consider shortening or simplifying your prompt."),
            Suggestion::WithinLimits => f.write_str("Prompt is within token limits."),
            Suggestion::Tip(tip) => f.write_str(tip.as_str()),
        }
    }
}

impl Serialize for Suggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Fixed prompt optimization tips, in the order they are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationTip {
    RemoveDetail,
    BeConcise,
    BeSpecific,
    Decompose,
}

impl OptimizationTip {
    pub const ALL: [OptimizationTip; 4] = [
        OptimizationTip::RemoveDetail,
        OptimizationTip::BeConcise,
        OptimizationTip::BeSpecific,
        OptimizationTip::Decompose,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationTip::RemoveDetail => "Remove unnecessary details.",
            OptimizationTip::BeConcise => "Be concise and clear.",
            OptimizationTip::BeSpecific => "Use specific instructions.",
            OptimizationTip::Decompose => "Break complex prompts into smaller parts.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Defaults read from a config file. CLI flags and environment win over these.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub model: String,
    pub max_tokens: usize,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            format: OutputFormat::Text,
        }
    }
}
