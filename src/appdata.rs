use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use serde::{Serialize, Deserialize};
use tracing::info;
use crate::client::CatalogClient;
use crate::error::{Error, Result};
use crate::sessions::Sessions;

#[derive(Clone)]
pub struct AppData {
    pub client:         Arc<CatalogClient>,
    pub sessions:       Arc<Sessions>
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub catalog_host:               String,
    #[serde(default = "default_bind_address")]
    pub bind_address:               String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol:            String,
    #[serde(default)]
    pub request_timeout_seconds:    Option<u64>,
    #[serde(default = "default_session_idle_seconds")]
    pub session_idle_seconds:       u64,
    #[serde(default = "default_max_visitors")]
    pub max_visitors:               usize
}

fn default_bind_address() -> String {
    "0.0.0.0:8090".to_string()
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

fn default_session_idle_seconds() -> u64 {
    1800
}

fn default_max_visitors() -> usize {
    10_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_host: "http://127.0.0.1:5000".to_string(),
            bind_address: default_bind_address(),
            currency_symbol: default_currency_symbol(),
            request_timeout_seconds: None,
            session_idle_seconds: default_session_idle_seconds(),
            max_visitors: default_max_visitors()
        }
    }
}

/// What reading the configuration produced.
#[derive(Debug)]
pub enum ConfigSource {
    Loaded(Config),
    /// No configuration existed; a default one was written to this path.
    DefaultWritten(PathBuf)
}

impl Config {
    pub fn read() -> Result<ConfigSource> {
        if std::env::var("CONFIG_ENV").is_ok() {
            info!("Reading configuration from environmental variables.");
            Self::read_from_env(|key| std::env::var(key).ok()).map(ConfigSource::Loaded)
        } else {
            info!("Reading configuration from file.");
            Self::read_from_file(Self::config_dir())
        }
    }

    fn config_dir() -> PathBuf {
        #[cfg(windows)]
        let config = PathBuf::from(r#"C:\Program Files\Catalogr"#.to_string());

        #[cfg(not(windows))]
        let config = PathBuf::from("/etc/catalogr".to_string());

        config
    }

    fn read_from_file(mut config: PathBuf) -> Result<ConfigSource> {
        if !config.exists() {
            std::fs::create_dir_all(config.as_path())?;
        }

        config.push("config.yml");

        if !config.exists() {
            std::fs::write(config.as_path(), serde_yaml::to_string(&Self::default())?)?;
            return Ok(ConfigSource::DefaultWritten(config));
        }

        let config_contents = std::fs::read_to_string(config.as_path())?;
        let config: Self = serde_yaml::from_str(&config_contents)?;

        Ok(ConfigSource::Loaded(config))
    }

    fn read_from_env<F>(var: F) -> Result<Self> where F: Fn(&str) -> Option<String> {
        let catalog_host = var("CATALOG_HOST")
            .ok_or_else(|| Error::Config("Required environmental variable 'CATALOG_HOST' is not set.".to_string()))?;

        let number = |key: &str| -> Result<Option<u64>> {
            match var(key) {
                Some(value) => value.trim().parse::<u64>()
                    .map(Some)
                    .map_err(|err| Error::Config(format!("'{}' is not a whole number: {}", key, err))),
                None => Ok(None)
            }
        };

        Ok(Self {
            catalog_host,
            bind_address: var("BIND_ADDRESS").unwrap_or_else(default_bind_address),
            currency_symbol: var("CURRENCY_SYMBOL").unwrap_or_else(default_currency_symbol),
            request_timeout_seconds: number("REQUEST_TIMEOUT_SECONDS")?,
            session_idle_seconds: number("SESSION_IDLE_SECONDS")?.unwrap_or_else(default_session_idle_seconds),
            max_visitors: match number("MAX_VISITORS")? {
                Some(max) => max as usize,
                None => default_max_visitors()
            }
        })
    }
}

impl AppData {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: Arc::new(CatalogClient::new(config)?),
            sessions: Arc::new(Sessions::new(
                Duration::from_secs(config.session_idle_seconds),
                config.max_visitors
            ))
        })
    }
}
