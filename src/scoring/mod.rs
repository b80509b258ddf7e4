//! Lexicon and rule based sentiment scoring
//!
//! Turns free text into `neg` / `neu` / `pos` proportions and a single
//! normalized `compound` score, following the VADER model.
//!
//! # Scoring Formula
//!
//! ```text
//! valence_i  = lexicon[token_i] adjusted by boosters, negation, caps,
//!              idioms and "but" weighting        (see valence.rs)
//! sum        = Σ valence_i ± punctuation emphasis
//! compound   = sum / sqrt(sum² + 15)             clamped to [-1, 1]
//!
//! pos_sum    = Σ (valence_i + 1)  for valence_i > 0
//! neg_sum    = Σ (valence_i - 1)  for valence_i < 0
//! neu_count  = #  valence_i == 0
//! total      = pos_sum + |neg_sum| + neu_count
//! pos, neg, neu = pos_sum / total, |neg_sum| / total, neu_count / total
//! ```
//!
//! # Punctuation Emphasis
//!
//! - Each `!` adds 0.292, counting at most 4
//! - Two or three `?` add 0.18 each; more than three add a flat 0.96
//! - Emphasis pushes the sum away from zero and is credited to whichever
//!   of the positive or negative buckets already dominates
//!
//! # Example
//!
//! "The service was absolutely terrible"
//! - terrible = -2.1, boosted by "absolutely" -> -2.393
//! - compound = -2.393 / sqrt(2.393² + 15) = -0.526 -> Negative

mod tokenizer;
mod valence;


pub use tokenizer::{tokenize, SentiText, Token};

use std::sync::Arc;
use tracing::debug;

use crate::classifier::LabelThresholds;
use crate::lexicon::rules::{
    EXCLAMATION_INCR, EXCLAMATION_MAX, NORMALIZE_ALPHA, QUESTION_CAP, QUESTION_INCR, QUESTION_MAX,
};
use crate::lexicon::Lexicon;
use crate::models::{Analysis, Label, SentimentResult};

/// Scores text against a shared, read-only lexicon.
///
/// Cheap to clone and safe to share across threads; every call to
/// [`SentimentScorer::score`] is independent.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: Arc<Lexicon>,
    thresholds: LabelThresholds,
}

impl SentimentScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            thresholds: LabelThresholds::default(),
        }
    }

    /// Replace the label thresholds
    pub fn with_thresholds(mut self, thresholds: LabelThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn thresholds(&self) -> &LabelThresholds {
        &self.thresholds
    }

    /// Score `text`. Never fails: empty input or input without any known
    /// words comes back neutral.
    pub fn score(&self, text: &str) -> SentimentResult {
        let senti_text = SentiText::new(text);
        if senti_text.is_empty() {
            return SentimentResult::neutral();
        }

        let valences = valence::token_valences(&senti_text, &self.lexicon);
        let emphasis = punctuation_emphasis(text);

        let mut sum: f64 = valences.iter().sum();
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }
        let compound = normalize(sum);

        let mut acc = ScoreAccumulator::default();
        for &v in &valences {
            acc.add(v);
        }
        let result = acc.finish(compound, emphasis);

        debug!(
            tokens = valences.len(),
            compound = result.compound,
            "scored text"
        );
        result
    }

    /// Label for a compound score under this scorer's thresholds
    pub fn classify(&self, compound: f64) -> Label {
        self.thresholds.classify(compound)
    }

    /// Score and label `text`, keeping the original text alongside
    pub fn analyze(&self, text: &str) -> Analysis {
        let scores = self.score(text);
        Analysis {
            text: text.to_string(),
            sentiment: self.classify(scores.compound),
            scores,
        }
    }
}

/// Running bucket totals for one text
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreAccumulator {
    pos_sum: f64,
    neg_sum: f64,
    neu_count: usize,
}

impl ScoreAccumulator {
    /// Add one token's adjusted valence. The +1 / -1 offsets balance
    /// scored words against neutral words, which each count as 1.
    pub fn add(&mut self, valence: f64) {
        if valence > 0.0 {
            self.pos_sum += valence + 1.0;
        } else if valence < 0.0 {
            self.neg_sum += valence - 1.0;
        } else {
            self.neu_count += 1;
        }
    }

    /// Proportions over everything added so far
    pub fn finish(self, compound: f64, emphasis: f64) -> SentimentResult {
        let mut pos_sum = self.pos_sum;
        let mut neg_sum = self.neg_sum;
        if pos_sum > neg_sum.abs() {
            pos_sum += emphasis;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= emphasis;
        }

        let total = pos_sum + neg_sum.abs() + self.neu_count as f64;
        if total <= 0.0 {
            return SentimentResult::neutral();
        }

        SentimentResult {
            neg: (neg_sum / total).abs(),
            neu: self.neu_count as f64 / total,
            pos: (pos_sum / total).abs(),
            compound,
        }
    }
}

/// Squash an unbounded valence sum into [-1, 1]
pub fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

/// Emphasis contributed by exclamation and question marks
pub fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(EXCLAMATION_MAX);
    let questions = text.matches('?').count();

    let question_emphasis = match questions {
        0 | 1 => 0.0,
        n if n <= QUESTION_MAX => n as f64 * QUESTION_INCR,
        _ => QUESTION_CAP,
    };

    exclamations as f64 * EXCLAMATION_INCR + question_emphasis
}
