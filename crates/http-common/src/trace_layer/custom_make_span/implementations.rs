use axum::{
    extract::MatchedPath,
    http::{Request, header},
};
use tower_http::trace::MakeSpan;
use tracing::Span;

use crate::trace_layer::custom_make_span::CustomMakeSpan;

impl CustomMakeSpan {
    /// The route template that matched, or `unmatched` for the fallback.
    pub fn route<B>(request: &Request<B>) -> &str {
        request
            .extensions()
            .get::<MatchedPath>()
            .map(MatchedPath::as_str)
            .unwrap_or("unmatched")
    }
}

impl<B> MakeSpan<B> for CustomMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let user_agent = request
            .headers()
            .get(header::USER_AGENT)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("unknown");

        tracing::info_span!(
            "Request",
            method = %request.method(),
            route = %Self::route(request),
            uri = %request.uri(),
            user_agent = %user_agent,
        )
    }
}
