//! Layered settings for the `verdict` binary.
//!
//! Sources, lowest priority first:
//!
//! 1. Built-in defaults ([`Settings::default`])
//! 2. A TOML file: `--config <path>`, or `verdict.toml` in the working
//!    directory when present
//! 3. Environment variables with the `VERDICT_` prefix
//! 4. Command-line flags ([`Overrides`])

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::address::StreetPolicy;

/// Config file read from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "verdict.toml";

/// Prefix of the environment variables that override file settings.
pub const ENV_PREFIX: &str = "VERDICT_";

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Street name policy.
    pub policy: StreetPolicy,
    /// Print outcomes as JSON.
    pub json: bool,
    /// `tracing` filter directive.
    pub log: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: StreetPolicy::default(),
            json: false,
            log: "warn".to_owned(),
        }
    }
}

/// Values given as command-line flags. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<StreetPolicy>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub json: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
}

/// Errors raised while resolving [`Settings`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `--config` named a file that does not exist.
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A source held a value of the wrong shape.
    #[error("invalid configuration: {0}")]
    Invalid(Box<figment::Error>),

    /// The `log` directive is not a valid `tracing` filter.
    #[error("invalid log filter `{directive}`: {reason}")]
    Filter { directive: String, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Invalid(Box::new(error))
    }
}

impl Settings {
    /// Resolves settings from every layer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when an explicit `path` is missing
    /// and [`ConfigError::Invalid`] when any layer fails to deserialize.
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) if !path.is_file() => return Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Toml::file_exact(path),
            None => Toml::file_exact(DEFAULT_CONFIG_FILE),
        };

        let settings: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(file)
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
            .extract()?;

        tracing::debug!(?settings, "configuration resolved");
        Ok(settings)
    }
}
