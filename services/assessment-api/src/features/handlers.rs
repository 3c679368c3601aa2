use std::net::SocketAddr;

use axum::{extract::ConnectInfo, response::IntoResponse};
use http_contracts::{data::DataResponse, message::MessageResponse};
use tracing::{info, instrument};

use crate::features::{ROOT_MESSAGE, USERS_MESSAGE, schemas::UserOut};

#[instrument(name = "root_handler", skip_all)]
pub async fn root_handler(ConnectInfo(addr): ConnectInfo<SocketAddr>) -> impl IntoResponse {
    info!(%addr, "client connected");
    MessageResponse::new(ROOT_MESSAGE)
}

#[instrument(name = "get_users_handler", skip_all)]
pub async fn get_users_handler(ConnectInfo(addr): ConnectInfo<SocketAddr>) -> impl IntoResponse {
    info!(%addr, "client connected");
    DataResponse::new(USERS_MESSAGE, UserOut::placeholder())
}
