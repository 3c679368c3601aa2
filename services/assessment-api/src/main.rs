pub mod app;
pub mod config;
pub mod error;
pub mod features;
pub mod implementations;

use std::path::PathBuf;
use std::{env, net::SocketAddr};

use crate::config::Config;
use crate::error::AppError;
use axum::{ServiceExt, extract::Request};
use factory::factories::observability::Observability;

use tracing::{debug, info};
use utility::{load_service_env::load_service_env, shutdown_signal::shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // These are baked at COMPILE time
    let cargo_manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let cargo_crate_name = env!("CARGO_CRATE_NAME");
    let cargo_pkg_version = env!("CARGO_PKG_VERSION");

    let env_files = load_service_env(&cargo_manifest_dir);

    let path = env::var("CONFIG").unwrap_or("config.json".to_string());
    let full_path = cargo_manifest_dir.join(path);
    let cfg = Config::init(full_path).await?;

    let _guard = Observability::init(cargo_crate_name, cargo_pkg_version, &cfg.observability)?;
    debug!(?env_files, "loaded env files");

    let app = app::app(app::router());
    let listener = app::bind_listener(cfg.server_address).await?;

    let port = listener.local_addr().map_err(AppError::Serve)?.port();

    info!("{}", app::startup_message(port));
    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(AppError::Serve)?;

    info!("👋 Shutting down gracefully...");

    Ok(())
}
