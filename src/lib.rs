//! sentimeter - lexicon and rule based feedback sentiment scoring
//!
//! Scores free text the VADER way: per-token valences from a polarity
//! lexicon, adjusted by boosters, negation, capitalization, idioms,
//! contrastive "but" and punctuation, then normalized into a compound
//! score in [-1, 1] alongside `neg` / `neu` / `pos` proportions.
//!
//! ```no_run
//! use std::sync::Arc;
//! use sentimeter::lexicon::Lexicon;
//! use sentimeter::scoring::SentimentScorer;
//!
//! let scorer = SentimentScorer::new(Arc::new(Lexicon::bundled()?));
//! let analysis = scorer.analyze("The food was great!");
//! println!("{} ({:.3})", analysis.sentiment, analysis.scores.compound);
//! # Ok::<(), sentimeter::lexicon::LexiconError>(())
//! ```

pub mod classifier;
pub mod cli;
pub mod config;
pub mod lexicon;
pub mod models;
pub mod reporters;
pub mod scoring;
pub mod server;
