//! Runner configuration: environment variables and the `headless` subcommand.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::core::{Board, UniformKinds};
use crate::engine::Session;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_TICK_MS};

pub const ENV_TICK_MS: &str = "TETROMINOES_TICK_MS";
pub const ENV_WIDTH: &str = "TETROMINOES_WIDTH";
pub const ENV_HEIGHT: &str = "TETROMINOES_HEIGHT";
pub const ENV_SEED: &str = "TETROMINOES_SEED";
pub const ENV_LOG_PATH: &str = "TETROMINOES_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub tick_ms: u64,
    pub width: u16,
    pub height: u16,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            seed: None,
            log_path: None,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable or zero values fall back to the
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            tick_ms: lookup(ENV_TICK_MS)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|&v| v > 0)
                .unwrap_or(defaults.tick_ms),
            width: lookup(ENV_WIDTH)
                .and_then(|v| v.trim().parse::<u16>().ok())
                .filter(|&v| v > 0)
                .unwrap_or(defaults.width),
            height: lookup(ENV_HEIGHT)
                .and_then(|v| v.trim().parse::<u16>().ok())
                .filter(|&v| v > 0)
                .unwrap_or(defaults.height),
            seed: lookup(ENV_SEED).and_then(|v| v.trim().parse::<u64>().ok()),
            log_path: lookup(ENV_LOG_PATH)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// An idle session on a board of the configured size. Fails when the
    /// size is out of range for a board.
    pub fn session(&self) -> Result<Session> {
        let board = Board::with_size(self.width, self.height)?;
        let kinds = match self.seed {
            Some(seed) => UniformKinds::from_seed(seed),
            None => UniformKinds::from_entropy(),
        };
        Ok(Session::with_board(board, kinds))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessConfig {
    pub seed: Option<u64>,
    pub max_pieces: u32,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_pieces: 100,
        }
    }
}

/// Parse `headless [--seed N] [--max-pieces N]`.
///
/// Returns `Ok(None)` when the first argument is not `headless`.
pub fn parse_headless_args(args: &[String]) -> Result<Option<HeadlessConfig>> {
    if args.first().map(String::as_str) != Some("headless") {
        return Ok(None);
    }

    let mut config = HeadlessConfig::default();
    let mut i = 1usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("headless: missing value for --seed"))?;
                config.seed = Some(
                    v.parse::<u64>()
                        .map_err(|_| anyhow!("headless: invalid --seed value: {}", v))?,
                );
            }
            "--max-pieces" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("headless: missing value for --max-pieces"))?;
                config.max_pieces = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("headless: invalid --max-pieces value: {}", v))?;
            }
            other => {
                return Err(anyhow!("headless: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Some(config))
}
