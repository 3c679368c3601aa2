pub mod implementation;

use axum::http::StatusCode;
use serde::Serialize;

/// Serializable error for API responses
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
}
