use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid environment variable: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub port: u16,
    pub max_connections: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            database: DatabaseConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            user: "root".to_string(),
            password: String::new(),
            name: "next_crud".to_string(),
            port: 3306,
            max_connections: 10,
        }
    }
}

impl Config {
    /// A pool without permits would park every request forever.
    fn validate(self) -> Result<Self, ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database max_connections must be at least 1",
            ));
        }
        Ok(self)
    }
}

/// Only `LISTEN_ADDR` lives outside the `DB_` prefix.
#[derive(Debug, Default, Deserialize)]
struct ListenerEnv {
    listen_addr: Option<String>,
}

fn from_vars<I>(vars: I) -> Result<Config, ConfigError>
where
    I: IntoIterator<Item = (String, String)> + Clone,
{
    let database = envy::prefixed("DB_").from_iter::<_, DatabaseConfig>(vars.clone())?;
    let listener = envy::from_iter::<_, ListenerEnv>(vars)?;

    Config {
        listen_addr: listener
            .listen_addr
            .unwrap_or_else(|| Config::default().listen_addr),
        database,
    }
    .validate()
}

fn from_file(path: &str) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    serde_yaml::from_str::<Config>(&contents)?.validate()
}

pub fn load_config() -> Result<Config, ConfigError> {
    // Retrieve env variable
    let config_path =
        env::var("NOTES_SERVER_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    // Try env path
    if Path::new(&config_path).exists() {
        tracing::info!("Loading configuration from '{}'", config_path);
        return from_file(&config_path);
    }

    // Fallback to config.yaml
    if Path::new("config.yaml").exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to 'config.yaml'",
            config_path
        );
        return from_file("config.yaml");
    }

    // Fallback to environment variables
    tracing::info!("No config file found, loading configuration from environment variables");
    from_vars(env::vars().collect::<Vec<_>>())
}
