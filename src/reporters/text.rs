//! Text (terminal) reporter with colors

use crate::models::{Analysis, Label};
use anyhow::Result;
use console::style;

/// Width of the compound gauge, in cells
const GAUGE_WIDTH: usize = 21;

fn styled_label(label: Label) -> String {
    match label {
        Label::Positive => style(label).green().bold().to_string(),
        Label::Neutral => style(label).dim().bold().to_string(),
        Label::Negative => style(label).red().bold().to_string(),
    }
}

/// Place a marker for `compound` on a [-1, 1] scale
fn gauge(compound: f64) -> String {
    let clamped = compound.clamp(-1.0, 1.0);
    let pos = (((clamped + 1.0) / 2.0) * (GAUGE_WIDTH - 1) as f64).round() as usize;
    let mut cells: Vec<char> = vec!['─'; GAUGE_WIDTH];
    cells[GAUGE_WIDTH / 2] = '┼';
    cells[pos.min(GAUGE_WIDTH - 1)] = '●';
    format!("-1 {} +1", cells.into_iter().collect::<String>())
}

/// Render analysis as formatted terminal output
pub fn render(analysis: &Analysis) -> Result<String> {
    let s = &analysis.scores;
    let mut out = String::new();

    out.push_str(&format!(
        "{}  {}\n",
        styled_label(analysis.sentiment),
        style(format!("compound {:+.4}", s.compound)).bold()
    ));
    out.push_str(&format!("{}\n", style(gauge(s.compound)).dim()));
    out.push_str(&format!(
        "  pos {:.3}   neu {:.3}   neg {:.3}\n",
        s.pos, s.neu, s.neg
    ));
    Ok(out)
}
