//! HTTP service command handler

use anyhow::Result;
use tracing::{info, warn};

use super::build_scorer;
use crate::config::AppConfig;

/// Load the lexicon, then run the HTTP service until shutdown
pub fn run(config: &AppConfig) -> Result<()> {
    // Lexicon errors surface here, before anything is bound
    let scorer = build_scorer(config)?;
    if config.lexicon.path.is_none() {
        warn!(
            "Serving with the bundled lexicon ({} entries); set [lexicon] path or \
             SENTIMETER_LEXICON to a full vader_lexicon.txt for complete coverage",
            scorer.lexicon().len()
        );
    }

    info!(
        "Starting sentimeter {} on {}",
        env!("CARGO_PKG_VERSION"),
        config.server.bind_address()
    );

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(crate::server::serve(&config.server, scorer))
}
