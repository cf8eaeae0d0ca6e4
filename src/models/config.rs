//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::{MAX_COMPARE_LEN, SIMILARITY_THRESHOLD};

#[derive(Clone, Debug, Deserialize)]
/// Settings for the search worker.
pub struct ServerConfig {
    pub database_url: String,
    pub zmq_address: String,
    pub similarity_threshold: f64,
    pub max_compare_len: usize,
}

impl ServerConfig {
    /// Layers built-in defaults, then `config/default.yaml` when present, then
    /// `APP_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config/default")
    }

    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", "app.db")?
            .set_default("zmq_address", "tcp://127.0.0.1:5555")?
            .set_default("similarity_threshold", SIMILARITY_THRESHOLD)?
            .set_default("max_compare_len", MAX_COMPARE_LEN as u64)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
