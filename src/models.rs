//! Core data models for sentimeter
//!
//! These are the values handed across the scorer boundary: the four
//! sub-scores, the coarse label derived from them, and the response
//! envelope callers already consume.

use serde::{Deserialize, Serialize};

/// Sub-scores for one piece of text.
///
/// `neg`, `neu` and `pos` are proportions of the text falling in each
/// bucket and sum to 1.0. `compound` is the normalized overall valence in
/// [-1, 1] and is computed separately from the other three.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl SentimentResult {
    /// Result for text with nothing to score
    pub fn neutral() -> Self {
        Self {
            neg: 0.0,
            neu: 1.0,
            pos: 0.0,
            compound: 0.0,
        }
    }
}

impl Default for SentimentResult {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Coarse sentiment label derived from the compound score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Positive => write!(f, "Positive"),
            Label::Neutral => write!(f, "Neutral"),
            Label::Negative => write!(f, "Negative"),
        }
    }
}

/// Analysis of one feedback text, in the shape returned to HTTP callers:
/// `{"text": ..., "sentiment": "Positive", "scores": {"neg", "neu", "pos", "compound"}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub text: String,
    pub sentiment: Label,
    pub scores: SentimentResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_result() {
        let r = SentimentResult::neutral();
        assert_eq!(r.neu, 1.0);
        assert_eq!(r.compound, 0.0);
        assert_eq!(r, SentimentResult::default());
    }

    #[test]
    fn test_label_serializes_capitalized() {
        assert_eq!(serde_json::to_string(&Label::Positive).unwrap(), "\"Positive\"");
        assert_eq!(serde_json::to_string(&Label::Negative).unwrap(), "\"Negative\"");
        assert_eq!(Label::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn test_analysis_field_names() {
        let analysis = Analysis {
            text: "ok".to_string(),
            sentiment: Label::Neutral,
            scores: SentimentResult::neutral(),
        };
        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["text"], "ok");
        assert_eq!(value["sentiment"], "Neutral");
        for key in ["neg", "neu", "pos", "compound"] {
            assert!(value["scores"].get(key).is_some(), "missing scores.{key}");
        }
        assert_eq!(value["scores"]["neu"], 1.0);
    }
}
