//! Layered loading: optional TOML file, then `WAQT_` environment variables.
//!
//! Environment keys nest with a double underscore, so
//! `WAQT_LOCATION__LATITUDE=23.8` sets `location.latitude` and
//! `WAQT_CALCULATION__ISHA__MINUTES=90` sets `calculation.isha`.

use std::path::Path;

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, File, FileFormat};
use tracing::debug;

use crate::document::WaqtConfig;
use crate::error::Result;

/// Default file stem looked up in the working directory (`waqt.toml`).
pub const DEFAULT_FILE_STEM: &str = "waqt";

fn environment() -> Environment {
    Environment::with_prefix("WAQT")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl WaqtConfig {
    /// Load from `path` (required) or `./waqt.toml` (optional), overlaid
    /// with the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let source = match path {
            Some(p) => File::from(p).format(FileFormat::Toml).required(true),
            None => File::with_name(DEFAULT_FILE_STEM).required(false),
        };
        let builder = Config::builder()
            .add_source(source)
            .add_source(environment());
        Self::build(builder)
    }

    /// Parse a TOML document without consulting the environment.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let file = File::from_str(toml, FileFormat::Toml);
        Self::build(Config::builder().add_source(file))
    }

    /// Parse a TOML document overlaid with an explicit environment map.
    pub fn from_toml_and_env(toml: &str, env: config::Map<String, String>) -> Result<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .add_source(environment().source(Some(env)));
        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: WaqtConfig = builder.build()?.try_deserialize()?;
        debug!(?config, "loaded configuration");
        Ok(config)
    }
}
