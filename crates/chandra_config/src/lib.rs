//! Engine configuration for the chandra lunar phase engine.
//!
//! This crate provides:
//! - `EngineConfig` and `IconConfig`, deserialized with serde
//! - Layered loading via the `config` crate (TOML file + `CHANDRA_*` env)
//! - Range validation of loaded values

pub mod error;
pub mod loader;
pub mod settings;

pub use error::ConfigError;
pub use loader::{ENV_PREFIX, load_config, load_config_str, load_config_with_env};
pub use settings::{DEFAULT_TICK_INTERVAL_MS, EngineConfig, IconConfig};
