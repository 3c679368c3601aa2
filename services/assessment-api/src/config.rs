use std::{net::SocketAddr, path::PathBuf};

use config::{ConfigBuilder, Environment, File, builder::AsyncState};
use factory::factories::observability::ObservabilityConfig;
use serde::Deserialize;

use crate::error::AppError;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:3000";
pub const ENV_PREFIX: &str = "APP";

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub server_address: SocketAddr,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// The settings file is optional; `APP_SERVER_ADDRESS` in the environment
    /// overrides both it and the default.
    pub async fn init(path: PathBuf) -> Result<Self, AppError> {
        Self::from_sources(path, Self::environment()).await
    }

    /// Only `APP_`-prefixed variables are read, `__` separates nested keys
    /// (`APP_OBSERVABILITY__LOG_FORMAT`).
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    async fn from_sources(path: PathBuf, environment: Environment) -> Result<Self, AppError> {
        let cfg = ConfigBuilder::<AsyncState>::default()
            .set_default("server_address", DEFAULT_SERVER_ADDRESS)?
            .add_source(File::from(path).required(false))
            .add_source(environment)
            .build()
            .await?;

        Ok(cfg.try_deserialize()?)
    }
}
