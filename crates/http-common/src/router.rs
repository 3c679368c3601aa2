use axum::Router;

use crate::handlers::not_found_handler;

/// Routes every service shares. Merge after the feature routes.
pub fn base_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().fallback(not_found_handler)
}
