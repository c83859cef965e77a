use core::fmt::{Debug, Display};
use std::path::Path;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;
use taking_turns_queue::Turns;

pub const DEFAULT_CONFIG_FILE: &str = "taking-turns.toml";
pub const ENV_PREFIX: &str = "TAKING_TURNS_";

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ParticipantConfig {
    pub name: String,
    /// Zero or less means infinite turns.
    #[serde(default)]
    pub turns: Turns,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Upper bound of service events the simulator runs.
    #[serde(default = "default_rounds")]
    pub rounds: usize,
    #[serde(default)]
    pub participants: Vec<ParticipantConfig>,
}

const fn default_rounds() -> usize {
    10
}

#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Figment(#[source] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(value: figment::Error) -> Self {
        Self::Figment(Box::new(value))
    }
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

pub fn get_config() -> Result<Config, ConfigError> {
    get_config_from(DEFAULT_CONFIG_FILE)
}

/// Reads the TOML file at `path`, environment variables prefixed with
/// `TAKING_TURNS_` take precedence. A missing file is not an error.
pub fn get_config_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    Ok(Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()?)
}
