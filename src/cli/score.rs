//! One-shot scoring command handler

use anyhow::{Context, Result};
use std::io::Read;

use super::build_scorer;
use crate::config::AppConfig;
use crate::reporters;

/// Score `text` (or stdin) and print the report
pub fn run(config: &AppConfig, text: Option<String>, format: &str) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if text.trim().is_empty() {
        anyhow::bail!("No feedback provided");
    }

    let scorer = build_scorer(config)?;
    let analysis = scorer.analyze(&text);
    let output = reporters::report(&analysis, format)?;
    println!("{}", output.trim_end());
    Ok(())
}
