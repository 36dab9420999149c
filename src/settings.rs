use std::env;

use serde::Deserialize;
use tracing::info;

use crate::store::local::DEFAULT_STORAGE_KEY;

#[derive(Clone, Copy, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Postgres JSONB document collection
    #[default]
    Document,
    /// Serialized collection under one redis key
    Local,
    /// Serialized collection held in process memory
    Memory,
}

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub env: String, // file / server
    pub host: String,
    pub port: u16,
    pub prefix: Option<String>,
    #[serde(default)]
    pub backend: Backend,
    pub database_url: Option<String>,
    pub redis_url: Option<String>,
    pub storage_key: Option<String>,
    pub seed_on_start: Option<bool>,
}

impl Config {
    pub fn storage_key(&self) -> String {
        self.storage_key
            .clone()
            .unwrap_or(DEFAULT_STORAGE_KEY.to_string())
    }

    pub fn seed_on_start(&self) -> bool {
        self.seed_on_start.unwrap_or(true)
    }
}

pub fn get_config() -> anyhow::Result<Config> {
    let env_var = env::var("env").unwrap_or("file".to_string());
    if env_var == "file" {
        info!("using .env file as environment variable");
        let _ = dotenvy::dotenv();
    } else {
        info!("using server environment as environment variable");
    }
    let config = envy::from_env::<Config>()?;
    Ok(config)
}
