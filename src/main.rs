//! prompt-gauge: token usage analysis and prompt optimization
//!
//! Counts the tokens a prompt costs under a model's tokenizer, checks the
//! count against a limit and prints advice for trimming it.

use anyhow::Result;

fn main() -> Result<()> {
    prompt_gauge::cli::run()
}
