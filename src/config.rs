// src/config.rs - Generator defaults, loadable from the environment

use std::{env, str::FromStr};

use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Default slug length for the plain policy.
pub const DEFAULT_PLAIN_LENGTH: usize = 6;
/// Default slug length for the obscured policy.
pub const DEFAULT_OBSCURED_LENGTH: usize = 10;
/// Default slug length for the safe policy.
pub const DEFAULT_SAFE_LENGTH: usize = 10;

/// How the plain and obscured policies resolve an encoding that comes out
/// shorter than the requested length.
///
/// Base62 output length follows numeric magnitude, so a buffer with leading
/// zero bytes encodes shorter than requested now and then. `Truncate` keeps
/// that variable-width behavior; `ZeroPad` left-pads with the alphabet's
/// zero symbol up to the requested length. The safe policy always emits
/// exact lengths and ignores this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPadding {
    /// Accept shorter-than-requested output (faithful variable-width).
    #[default]
    Truncate,
    /// Left-pad with '0' to the requested length.
    ZeroPad,
}

impl FromStr for LengthPadding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "truncate" | "variable" => Ok(LengthPadding::Truncate),
            "zeropad" | "zero-pad" | "pad" => Ok(LengthPadding::ZeroPad),
            _ => Err(format!(
                "Invalid padding mode: {}. Must be one of: truncate, zeropad",
                s
            )),
        }
    }
}

/// Configuration errors raised while loading from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),
    #[error("Parse error: {0}")]
    Parse(String),
}

type ConfigResult<T> = Result<T, ConfigError>;

/// Default lengths per policy plus the length-padding choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub plain_length: usize,
    pub obscured_length: usize,
    pub safe_length: usize,
    pub padding: LengthPadding,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            plain_length: DEFAULT_PLAIN_LENGTH,
            obscured_length: DEFAULT_OBSCURED_LENGTH,
            safe_length: DEFAULT_SAFE_LENGTH,
            padding: LengthPadding::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from environment variables, falling back to the
    /// built-in defaults for anything unset.
    pub fn load() -> ConfigResult<Self> {
        // Load .env file if it exists
        match dotenv() {
            Ok(_) => debug!(".env file loaded successfully"),
            Err(e) => debug!("Could not load .env file: {}", e),
        }

        let config = Self {
            plain_length: get_env_or_default("SLUG_PLAIN_LENGTH", "6")?,
            obscured_length: get_env_or_default("SLUG_OBSCURED_LENGTH", "10")?,
            safe_length: get_env_or_default("SLUG_SAFE_LENGTH", "10")?,
            padding: get_env_or_default("SLUG_PADDING", "truncate")?,
        };

        if config.plain_length == 0 || config.obscured_length == 0 || config.safe_length == 0 {
            warn!("Configured slug length of 0 will produce empty slugs");
        }
        debug!("Loaded config: {:?}", config);

        Ok(config)
    }
}

/// Helper function to get an env variable with a default value
fn get_env_or_default<T: FromStr>(key: &str, default: &str) -> ConfigResult<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| ConfigError::Parse(format!("Could not parse {}: {}", key, e))),
        Err(env::VarError::NotPresent) => {
            debug!("{} not set, using default: {}", key, default);
            default.parse::<T>().map_err(|e| {
                ConfigError::Parse(format!("Could not parse default for {}: {}", key, e))
            })
        }
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_policy_documentation() {
        let config = GeneratorConfig::default();
        assert_eq!(config.plain_length, 6);
        assert_eq!(config.obscured_length, 10);
        assert_eq!(config.safe_length, 10);
        assert_eq!(config.padding, LengthPadding::Truncate);
    }

    // One test owns every SLUG_* key; tests run in parallel threads and
    // env vars are process-global.
    #[test]
    fn load_reads_env_overrides_and_rejects_bad_values() {
        env::set_var("SLUG_PLAIN_LENGTH", "8");
        env::set_var("SLUG_PADDING", "zeropad");

        let config = GeneratorConfig::load().unwrap();
        assert_eq!(config.plain_length, 8);
        assert_eq!(config.padding, LengthPadding::ZeroPad);
        // Unset keys keep their defaults
        assert_eq!(config.obscured_length, DEFAULT_OBSCURED_LENGTH);
        assert_eq!(config.safe_length, DEFAULT_SAFE_LENGTH);

        env::set_var("SLUG_PLAIN_LENGTH", "not-a-number");
        let err = GeneratorConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("SLUG_PLAIN_LENGTH"));

        env::remove_var("SLUG_PLAIN_LENGTH");
        env::remove_var("SLUG_PADDING");
    }

    #[test]
    fn padding_parses_from_str() {
        assert_eq!("truncate".parse::<LengthPadding>().unwrap(), LengthPadding::Truncate);
        assert_eq!("variable".parse::<LengthPadding>().unwrap(), LengthPadding::Truncate);
        assert_eq!("zeropad".parse::<LengthPadding>().unwrap(), LengthPadding::ZeroPad);
        assert_eq!("ZeroPad".parse::<LengthPadding>().unwrap(), LengthPadding::ZeroPad);
        assert!("center".parse::<LengthPadding>().is_err());
    }
}
