//! Output reporters for scored feedback
//!
//! Supports two output formats:
//! - `text` - Terminal output with colors
//! - `json` - The same envelope `POST /analyze` returns

mod json;
mod text;

use crate::models::Analysis;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render an analysis in the specified format
pub fn report(analysis: &Analysis, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(analysis, fmt)
}

/// Render an analysis using an OutputFormat enum
pub fn report_with_format(analysis: &Analysis, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(analysis),
        OutputFormat::Json => json::render(analysis),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Label, SentimentResult};

    pub(crate) fn test_analysis() -> Analysis {
        Analysis {
            text: "The food was great".into(),
            sentiment: Label::Positive,
            scores: SentimentResult {
                neg: 0.0,
                neu: 0.508,
                pos: 0.492,
                compound: 0.6249,
            },
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("TXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("sarif".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_display_round_trip() {
        for fmt in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(fmt.to_string().parse::<OutputFormat>().unwrap(), fmt);
        }
    }

    #[test]
    fn test_report_dispatch() {
        let analysis = test_analysis();
        let json = report(&analysis, "json").unwrap();
        assert!(json.trim_start().starts_with('{'));
        let text = report(&analysis, "text").unwrap();
        assert!(text.contains("Positive"));
        assert!(report(&analysis, "html").is_err());
    }
}
