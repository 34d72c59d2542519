use std::fmt;
use std::time::Duration;

/// Settings for an interactive game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Pause after each processed input, before the board is shown again.
    pub turn_delay: Duration,
}

impl GameConfig {
    /// Build a config from a delay in (possibly fractional) seconds.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidDelay` for negative, NaN or infinite
    /// values.
    pub fn from_seconds(seconds: f64) -> Result<Self, ConfigError> {
        let turn_delay = Duration::try_from_secs_f64(seconds)
            .map_err(|_| ConfigError::InvalidDelay { seconds })?;
        Ok(GameConfig { turn_delay })
    }
}

/// Error type for rejected configuration values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidDelay { seconds: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDelay { seconds } => {
                write!(f, "Invalid turn delay {seconds} (must be a finite, non-negative number of seconds)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
