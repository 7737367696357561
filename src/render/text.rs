//! Plain-text rendering.

use crate::analyze::AnalyzeError;
use crate::domain::AnalysisResult;
use std::io::{self, Write};

pub fn render_text(result: &AnalysisResult, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Prompt Token Count: {}", result.token_count)?;
    for line in result.status() {
        writeln!(out, "{}", line)?;
    }

    let mut tips = result.tips().peekable();
    if tips.peek().is_some() {
        writeln!(out, "\nSuggestions for prompt optimization:")?;
        for tip in tips {
            writeln!(out, "- {}", tip)?;
        }
    }
    Ok(())
}

pub fn render_failure_text(err: &AnalyzeError, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::suggestions_for;
    use crate::tokenize::TokenizeError;
    use similar_asserts::assert_eq;

    fn result(token_count: usize, max_tokens: usize) -> AnalysisResult {
        AnalysisResult {
            model: "gpt-3.5-turbo".to_string(),
            encoding: "cl100k_base".to_string(),
            token_count,
            max_tokens,
            within_limit: token_count <= max_tokens,
            suggestions: suggestions_for(token_count, max_tokens),
        }
    }

    fn render(result: &AnalysisResult) -> String {
        let mut buf = Vec::new();
        render_text(result, &mut buf).expect("render");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn test_render_within_limits() {
        assert_eq!(render(&result(4, 1000)), "Prompt Token Count: 4\nPrompt is within token limits.\n");
    }

    #[test]
    fn test_render_exceeded_with_tips() {
        let expected = "\
Prompt Token Count: 150
Warning: Prompt exceeds the maximum token limit (100).
Consider shortening or simplifying your prompt.

Suggestions for prompt optimization:
- Remove unnecessary details.
- Be concise and clear.
- Use specific instructions.
- Break complex prompts into smaller parts.
";
        assert_eq!(render(&result(150, 100)), expected);
    }

    #[test]
    fn test_render_failure() {
        let err = AnalyzeError::UnableToEstimate(TokenizeError::UnsupportedModel {
            model: "nope".to_string(),
        });
        let mut buf = Vec::new();
        render_failure_text(&err, &mut buf).expect("render");
        assert_eq!(
            String::from_utf8(buf).expect("utf8"),
            "Unable to estimate tokens: no tokenizer mapping for model 'nope'\n"
        );
    }
}
