//! Layered loading: built-in defaults, then an optional TOML file, then
//! `CHANDRA_*` environment variables.
//!
//! Nested keys use a double underscore in the environment, e.g.
//! `CHANDRA_ICON__MODEL=mask_offset` or `CHANDRA_TICK_INTERVAL_MS=500`.

use std::path::Path;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

use crate::error::ConfigError;
use crate::settings::EngineConfig;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "CHANDRA";

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<EngineConfig, ConfigError> {
    let cfg: EngineConfig = builder.build()?.try_deserialize()?;
    cfg.validate()?;
    tracing::debug!(?cfg, "configuration loaded");
    Ok(cfg)
}

/// Load the configuration. A given `path` must exist; without one only
/// defaults and the environment apply.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig, ConfigError> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
    }
    finish(builder.add_source(environment()))
}

/// Load from TOML text with no environment overlay.
pub fn load_config_str(toml: &str) -> Result<EngineConfig, ConfigError> {
    finish(config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
}

/// Load from TOML text overlaid by an explicit set of environment variables.
pub fn load_config_with_env<I, K, V>(toml: &str, vars: I) -> Result<EngineConfig, ConfigError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let vars: config::Map<String, String> = vars
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    finish(
        config::Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .add_source(environment().source(Some(vars))),
    )
}
