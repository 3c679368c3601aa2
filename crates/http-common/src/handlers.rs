use std::net::SocketAddr;

use axum::{
    extract::ConnectInfo,
    http::{Method, Uri},
    response::IntoResponse,
};
use http_contracts::error::ErrorResponse;
use tracing::info;

#[tracing::instrument("not_found_handler", skip_all, fields(addr = %addr))]
pub async fn not_found_handler(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    method: Method,
    uri: Uri,
) -> impl IntoResponse {
    info!(%method, %uri, "no route matched");
    ErrorResponse::not_found(format!("Cannot {} {}", method, uri.path()))
}
