use config::ConfigError;
use thiserror::Error;

/// Startup and serve failures. Route handlers are infallible.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Port {port} is unavailable: {source}")]
    BindError {
        port: u16,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
