//! JSON reporter
//!
//! Outputs the analysis as pretty-printed JSON, keyed exactly like the
//! HTTP response so scripts can consume either.

use crate::models::Analysis;
use anyhow::Result;

/// Render analysis as JSON
pub fn render(analysis: &Analysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}
