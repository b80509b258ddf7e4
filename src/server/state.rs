use std::sync::Arc;

use crate::scoring::SentimentScorer;

/// Shared, read-only request state
#[derive(Debug)]
pub struct AppState {
    pub scorer: SentimentScorer,
}

impl AppState {
    pub fn new(scorer: SentimentScorer) -> Arc<Self> {
        Arc::new(Self { scorer })
    }
}
