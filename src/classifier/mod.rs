//! Compound score → coarse label
//!
//! A compound score at or above the positive threshold is Positive, at or
//! below the negative threshold is Negative, anything between is Neutral.
//! The defaults (±0.05) are the conventional VADER cut-offs.

use serde::{Deserialize, Serialize};

use crate::models::Label;

pub const DEFAULT_POSITIVE_THRESHOLD: f64 = 0.05;
pub const DEFAULT_NEGATIVE_THRESHOLD: f64 = -0.05;

/// Label cut-offs on the compound score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelThresholds {
    /// Minimum compound score labelled Positive (default: 0.05)
    #[serde(default = "default_positive_threshold")]
    pub positive_threshold: f64,

    /// Maximum compound score labelled Negative (default: -0.05)
    #[serde(default = "default_negative_threshold")]
    pub negative_threshold: f64,
}

impl Default for LabelThresholds {
    fn default() -> Self {
        Self {
            positive_threshold: default_positive_threshold(),
            negative_threshold: default_negative_threshold(),
        }
    }
}

fn default_positive_threshold() -> f64 {
    DEFAULT_POSITIVE_THRESHOLD
}
fn default_negative_threshold() -> f64 {
    DEFAULT_NEGATIVE_THRESHOLD
}

impl LabelThresholds {
    /// Both thresholds inside [-1, 1] and not crossed
    pub fn is_valid(&self) -> bool {
        let in_range = |t: f64| (-1.0..=1.0).contains(&t);
        in_range(self.positive_threshold)
            && in_range(self.negative_threshold)
            && self.negative_threshold <= self.positive_threshold
    }

    pub fn classify(&self, compound: f64) -> Label {
        if compound >= self.positive_threshold {
            Label::Positive
        } else if compound <= self.negative_threshold {
            Label::Negative
        } else {
            Label::Neutral
        }
    }
}

/// Classify with the default thresholds
pub fn classify(compound: f64) -> Label {
    LabelThresholds::default().classify(compound)
}
