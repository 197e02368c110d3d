//! Command-line configuration.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use thiserror::Error;

use crate::types::{DEFAULT_DIMENSION, MIN_DIMENSION};

/// Largest board offered on the command line. The engine itself has no
/// upper bound; past this size even compact tiles overflow a typical terminal.
pub const MAX_DIMENSION: usize = 16;

#[derive(Parser, Debug, Clone)]
#[command(name = "tui-2048", version, about = "Play 2048 in the terminal")]
pub struct Args {
    /// Board size; anything that is not a number falls back to 4.
    pub dimension: Option<String>,
    /// Seed for tile spawns (default: derived from the clock).
    #[arg(long)]
    pub seed: Option<u64>,
    /// Leaderboard name; prompted for after the game when absent.
    #[arg(long)]
    pub name: Option<String>,
    /// Do not record the final score.
    #[arg(long)]
    pub no_save: bool,
    /// Write tracing output to this file (the terminal is busy with the board).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Optional tracing filter, e.g. "info", "debug".
    #[arg(long, default_value = "info")]
    pub log: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board dimension {0} is outside 2..=16")]
    DimensionOutOfRange(usize),
}

/// Resolved settings for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub dimension: usize,
    pub seed: u64,
    pub player_name: Option<String>,
    pub save_score: bool,
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let dimension = parse_dimension(args.dimension.as_deref())?;
        let player_name = args
            .name
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Ok(Self {
            dimension,
            seed: args.seed.unwrap_or_else(clock_seed),
            player_name,
            save_score: !args.no_save,
            log_file: args.log_file,
            log_filter: args.log,
        })
    }
}

/// Lenient dimension parsing: garbage means the default board, a number
/// outside the supported range is an error.
pub fn parse_dimension(raw: Option<&str>) -> Result<usize, ConfigError> {
    let dimension = raw
        .and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_DIMENSION);

    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
        Ok(dimension)
    } else {
        Err(ConfigError::DimensionOutOfRange(dimension))
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_defaults_when_missing_or_garbage() {
        assert_eq!(parse_dimension(None), Ok(4));
        assert_eq!(parse_dimension(Some("abc")), Ok(4));
        assert_eq!(parse_dimension(Some("-3")), Ok(4));
        assert_eq!(parse_dimension(Some(" 6 ")), Ok(6));
    }

    #[test]
    fn dimension_out_of_range_is_rejected() {
        assert_eq!(
            parse_dimension(Some("1")),
            Err(ConfigError::DimensionOutOfRange(1))
        );
        assert_eq!(
            parse_dimension(Some("0")),
            Err(ConfigError::DimensionOutOfRange(0))
        );
        assert_eq!(
            parse_dimension(Some("17")),
            Err(ConfigError::DimensionOutOfRange(17))
        );
        assert_eq!(parse_dimension(Some("2")), Ok(2));
        assert_eq!(parse_dimension(Some("16")), Ok(16));
    }

    #[test]
    fn args_parse_into_config() {
        let args = Args::try_parse_from([
            "tui-2048", "5", "--seed", "42", "--name", "  ada ", "--no-save",
        ])
        .unwrap();
        let config = AppConfig::from_args(args).unwrap();
        assert_eq!(config.dimension, 5);
        assert_eq!(config.seed, 42);
        assert_eq!(config.player_name.as_deref(), Some("ada"));
        assert!(!config.save_score);
        assert_eq!(config.log_filter, "info");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn blank_name_means_prompt() {
        let args = Args::try_parse_from(["tui-2048", "--name", "   "]).unwrap();
        let config = AppConfig::from_args(args).unwrap();
        assert_eq!(config.player_name, None);
        assert_eq!(config.dimension, 4);
        assert!(config.save_score);
    }
}
