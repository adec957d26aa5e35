//! Playback configuration.

use std::path::Path;
use std::time::Duration;

use gt_traverse::Algorithm;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Slowest accepted inter-step delay.
pub const MAX_SPEED_MS: u64 = 60_000;

/// How a traversal is played back.
///
/// ```yaml
/// speed_ms: 400      # delay between auto steps
/// step_mode: false   # true: advance by hand
/// algorithm: dfs     # default for front-ends that don't ask
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Delay between steps in auto mode, in milliseconds.
    pub speed_ms: u64,
    /// When on, each step waits for an explicit advance.
    pub step_mode: bool,
    pub algorithm: Algorithm,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed_ms: 800,
            step_mode: false,
            algorithm: Algorithm::Bfs,
        }
    }
}

impl PlaybackConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let config: PlaybackConfig = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        check_speed(self.speed_ms)
    }
}

/// Load playback config from a YAML file.
pub fn load_config(path: &Path) -> AppResult<PlaybackConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    PlaybackConfig::from_yaml_str(&content)
}

pub(crate) fn check_speed(speed_ms: u64) -> AppResult<()> {
    if speed_ms > MAX_SPEED_MS {
        return Err(AppError::InvalidInput(format!(
            "speed must be at most {MAX_SPEED_MS} ms, got {speed_ms}"
        )));
    }
    Ok(())
}
