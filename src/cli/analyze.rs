//! Analyze command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use super::utils::parse_max_tokens;
use crate::analyze::analyze;
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{AnalysisRequest, OutputFormat};
use crate::render::{render_failure_text, render_json, render_json_failure, render_text};
use crate::tokenize::{known_models, TiktokenProvider};
use crate::utils::read_prompt;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// The prompt text to analyze
    #[arg(
        value_name = "PROMPT",
        required_unless_present_any = ["file", "list_models"],
        conflicts_with = "file"
    )]
    pub prompt: Option<String>,

    /// Read the prompt from a file ('-' for stdin)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Model name (default: gpt-3.5-turbo)
    #[arg(short, long, env = "PROMPT_GAUGE_MODEL", value_name = "MODEL")]
    pub model: Option<String>,

    /// Maximum allowed tokens for prompt (default: 1000)
    #[arg(long, env = "PROMPT_GAUGE_MAX_TOKENS", value_name = "N", value_parser = parse_max_tokens)]
    pub max_tokens: Option<usize>,

    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Path to config file (prompt-gauge.toml or prompt-gauge.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// List known model names and their encodings, then exit
    #[arg(long)]
    pub list_models: bool,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.list_models {
        writeln!(out, "Known models:")?;
        for (model, encoding) in known_models() {
            writeln!(out, "  {:<24} {}", model, encoding)?;
        }
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let file_config = load_config(&cwd, args.config.as_deref())?;
    let settings = merge_cli_with_config(
        file_config,
        CliOverrides { model: args.model, max_tokens: args.max_tokens, format: args.format },
    );

    let prompt = match (args.prompt, args.file) {
        (Some(prompt), _) => prompt,
        (None, Some(path)) => read_prompt(&path)?.0,
        (None, None) => anyhow::bail!("A prompt or --file must be given"),
    };

    let request = AnalysisRequest::new(prompt, settings.model, settings.max_tokens)?;
    match analyze(&TiktokenProvider, &request) {
        Ok(result) => match settings.format {
            OutputFormat::Text => render_text(&result, &mut out)?,
            OutputFormat::Json => writeln!(out, "{}", render_json(&result)?)?,
        },
        Err(err) => {
            // Soft failure: report and finish with a zero exit code.
            tracing::debug!("analysis aborted: {}", err);
            match settings.format {
                OutputFormat::Text => render_failure_text(&err, &mut out)?,
                OutputFormat::Json => {
                    writeln!(out, "{}", render_json_failure(&request.model, &err)?)?
                }
            }
        }
    }

    Ok(())
}
