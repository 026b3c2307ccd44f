// config.rs
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    /// Listings CSV, read once at startup.
    pub data_path: PathBuf,
    /// Regression model artifact, read on the first prediction.
    pub model_path: PathBuf,
    pub max_workers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_path: PathBuf::from("data/kijiji_cleaned.csv"),
            model_path: PathBuf::from("data/random_forest_regressor_model.json"),
            max_workers: 8,
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by `DASHBOARD_*` variables (a `.env` file is
    /// honoured when present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("DASHBOARD_ADDR") {
            cfg.addr = v.parse().map_err(|_| ConfigError::Invalid {
                key: "DASHBOARD_ADDR",
                value: v.clone(),
            })?;
        }
        if let Some(v) = lookup("DASHBOARD_DATA_PATH") {
            cfg.data_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("DASHBOARD_MODEL_PATH") {
            cfg.model_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("DASHBOARD_WORKERS") {
            cfg.max_workers = match v.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DASHBOARD_WORKERS",
                        value: v,
                    })
                }
            };
        }

        Ok(cfg)
    }
}
