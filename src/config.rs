/// Run configuration — who to imitate, where the dumps live, what to generate.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory scanned for exports when none is configured.
pub const DEFAULT_SOURCE_DIR: &str = "telegram_dumps";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("no target identity configured (set `target_identity` or pass --target)")]
    MissingTargetIdentity,
}

/// Settings for one babble run. Every field except `target_identity`
/// has a default, so a RON file only needs the fields it changes:
///
/// ```ron
/// (
///     target_identity: "user71398848",
///     sentence_length: 10,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `from_id` of the author whose messages are learned.
    pub target_identity: String,
    pub source_dir: PathBuf,
    /// How many sentences to print.
    pub sentence_count: usize,
    /// Sampling steps after the seed word.
    pub sentence_length: usize,
    /// Only the `top_k` most frequent successors are candidates. `None`
    /// considers all of them.
    pub top_k: Option<usize>,
    /// Fixed RNG seed for reproducible output.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_identity: String::new(),
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            sentence_count: 10,
            sentence_length: 5,
            top_k: None,
            seed: None,
        }
    }
}

impl Config {
    /// Config for `target_identity` with everything else defaulted.
    pub fn for_target(target_identity: &str) -> Self {
        Self {
            target_identity: target_identity.to_string(),
            ..Self::default()
        }
    }

    /// Load a config from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    pub fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(contents)?)
    }

    /// Reject configs that cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_identity.trim().is_empty() {
            return Err(ConfigError::MissingTargetIdentity);
        }
        Ok(())
    }
}
