//! JSON report rendering.

use crate::analyze::AnalyzeError;
use crate::domain::AnalysisResult;
use anyhow::Result;
use serde_json::json;

pub fn render_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

pub fn render_json_failure(model: &str, err: &AnalyzeError) -> Result<String> {
    let report = json!({
        "model": model,
        "error": err.to_string(),
    });
    Ok(serde_json::to_string_pretty(&report)?)
}
