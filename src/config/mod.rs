//! Configuration module for sentimeter
//!
//! This module handles:
//! - Server bind address
//! - Lexicon file location
//! - Label thresholds
//!
//! Sources, highest priority first: CLI flags, environment variables,
//! `./sentimeter.toml`, `~/.config/sentimeter/config.toml`, defaults.

mod app_config;

pub use app_config::{AppConfig, LexiconConfig, ServerConfig, PROJECT_CONFIG_FILE};
