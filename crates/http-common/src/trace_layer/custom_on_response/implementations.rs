use axum::http::{Response, StatusCode};
use std::time::Duration;
use tower_http::trace::OnResponse;
use tracing::{Level, Span, event};

use crate::trace_layer::custom_on_response::CustomOnResponse;

impl CustomOnResponse {
    pub fn level_for(status: StatusCode) -> Level {
        if status.is_server_error() {
            Level::ERROR
        } else if status.is_client_error() {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}

impl<B> OnResponse<B> for CustomOnResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, _span: &Span) {
        let status = response.status();
        let latency = latency.as_millis();

        // `event!` needs the level as a constant
        let level = Self::level_for(status);
        if level == Level::ERROR {
            event!(Level::ERROR, status = %status, latency = %latency, "HTTP request failed");
        } else if level == Level::WARN {
            event!(Level::WARN, status = %status, latency = %latency, "HTTP request rejected");
        } else {
            event!(Level::INFO, status = %status, latency = %latency, "HTTP request finished");
        }
    }
}
