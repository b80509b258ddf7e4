//! CLI command definitions and handlers

mod score;
mod serve;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{AppConfig, PROJECT_CONFIG_FILE};
use crate::lexicon::Lexicon;
use crate::scoring::SentimentScorer;

/// sentimeter - feedback sentiment scoring
///
/// Scores text with a VADER-style lexicon and rule set. Everything runs
/// locally; no text leaves the machine.
#[derive(Parser, Debug)]
#[command(name = "sentimeter")]
#[command(
    version,
    about = "Lexicon and rule based sentiment scoring for feedback text",
    after_help = "\
Examples:
  sentimeter score \"The food was great!\"        Score one piece of text
  echo \"slow and rude\" | sentimeter score        Score stdin
  sentimeter score \"meh\" --format json          JSON output for scripting
  sentimeter serve --port 8080                  Start the HTTP service
  sentimeter config show                        Show effective configuration"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(
        long,
        global = true,
        default_value = "info",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    pub log_level: String,

    /// Config file to use instead of ./sentimeter.toml and the user config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP service (GET /, POST /analyze, GET /health)
    Serve {
        /// Bind address (default: 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (default: 5000)
        #[arg(long)]
        port: Option<u16>,

        /// Lexicon file (default: bundled lexicon)
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },

    /// Score text given as an argument or on stdin
    Score {
        /// Text to score (default: read stdin)
        text: Option<String>,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Lexicon file (default: bundled lexicon)
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },

    /// Manage configuration (init or show)
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create the user config file with example settings
    Init,
    /// Show config paths and the effective configuration
    Show,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve {
            host,
            port,
            lexicon,
        } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if lexicon.is_some() {
                config.lexicon.path = lexicon;
            }
            serve::run(&config)
        }

        Commands::Score {
            text,
            format,
            lexicon,
        } => {
            let mut config = load_config(cli.config.as_deref())?;
            if lexicon.is_some() {
                config.lexicon.path = lexicon;
            }
            score::run(&config, text, &format)
        }

        Commands::Config { action } => run_config_action(action, cli.config.as_deref()),

        Commands::Version => {
            println!("sentimeter {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Effective config: an explicit file, or the layered defaults
fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    match explicit {
        Some(path) => AppConfig::load_file(path),
        None => AppConfig::load(Path::new(".")),
    }
}

/// Load the configured lexicon and wrap it in a scorer. Fails fast on a
/// missing or malformed lexicon file.
fn build_scorer(config: &AppConfig) -> Result<SentimentScorer> {
    let lexicon = Lexicon::load_or_bundled(config.lexicon.path.as_deref())
        .context("Failed to load lexicon")?;
    Ok(SentimentScorer::new(Arc::new(lexicon)).with_thresholds(config.thresholds))
}

fn run_config_action(action: ConfigAction, explicit: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = AppConfig::init_user_config()?;
            println!(
                "{} Config initialized at: {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
            println!("\nOr override per run via environment:");
            println!("  export SENTIMETER_PORT=8080");
            println!("  export SENTIMETER_LEXICON=/path/to/vader_lexicon.txt");
            Ok(())
        }
        ConfigAction::Show => show_config(explicit),
    }
}

fn show_config(explicit: Option<&Path>) -> Result<()> {
    let config = load_config(explicit)?;

    println!("{}", style("Config paths:").bold());
    if let Some(path) = explicit {
        println!("  Explicit: {} {}", path.display(), found_marker(path));
    } else {
        if let Some(user_path) = AppConfig::user_config_path() {
            println!("  User:     {} {}", user_path.display(), found_marker(&user_path));
        }
        let project = Path::new(PROJECT_CONFIG_FILE);
        println!("  Project:  ./{} {}", PROJECT_CONFIG_FILE, found_marker(project));
    }
    println!();
    println!("{}", style("Effective configuration:").bold());
    print!("{}", config.to_toml()?);
    Ok(())
}

fn found_marker(path: &Path) -> console::StyledObject<&'static str> {
    if path.exists() {
        style("✓").green()
    } else {
        style("(not found)").dim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_score_defaults() {
        let cli = Cli::try_parse_from(["sentimeter", "score", "hello"]).unwrap();
        assert_eq!(cli.log_level, "info");
        match cli.command {
            Commands::Score {
                text,
                format,
                lexicon,
            } => {
                assert_eq!(text.as_deref(), Some("hello"));
                assert_eq!(format, "text");
                assert!(lexicon.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "sentimeter",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level, "debug");
        match cli.command {
            Commands::Serve { host, port, .. } => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["sentimeter", "score", "x", "--format", "html"]).is_err());
    }

    #[test]
    fn test_build_scorer_uses_thresholds() {
        let mut config = AppConfig::default();
        config.thresholds.positive_threshold = 0.9;
        let scorer = build_scorer(&config).unwrap();
        assert_eq!(scorer.thresholds().positive_threshold, 0.9);
        assert!(!scorer.lexicon().is_empty());
    }

    #[test]
    fn test_build_scorer_missing_lexicon_fails() {
        let mut config = AppConfig::default();
        config.lexicon.path = Some(PathBuf::from("/definitely/not/here.txt"));
        let err = build_scorer(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.txt"));
    }
}
