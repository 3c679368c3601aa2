pub mod handlers;
pub mod implementations;
pub mod schemas;

use axum::{Router, routing::get};

pub const ROOT_MESSAGE: &str = "This is the backend for the continuous assessment";
pub const USERS_MESSAGE: &str = "This is the users endpoint";

pub fn get_routes() -> Router {
    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/api/v1/users", get(handlers::get_users_handler))
}
