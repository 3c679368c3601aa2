use std::net::SocketAddr;

use axum::{Router, extract::Request};
use http_common::{
    normalize::lowercase_path,
    router::base_routes,
    trace_layer::{custom_make_span::CustomMakeSpan, custom_on_response::CustomOnResponse},
};
use tokio::net::TcpListener;
use tower::{Layer, ServiceBuilder, util::MapRequest};
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, features};

/// Path rewriting has to happen before routing, so it wraps the `Router`
/// instead of being one of its layers.
pub type App = NormalizePath<MapRequest<Router, fn(Request) -> Request>>;

pub fn router() -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(CustomMakeSpan)
        .on_response(CustomOnResponse);

    axum::Router::new()
        .merge(features::get_routes())
        .merge(base_routes())
        .layer(tracing_layer)
}

/// `/API/V1/Users/` is served like `/api/v1/users`.
pub fn app(router: Router) -> App {
    NormalizePathLayer::trim_trailing_slash().layer(
        ServiceBuilder::new()
            .map_request(lowercase_path as fn(Request) -> Request)
            .service(router),
    )
}

pub async fn bind_listener(addr: SocketAddr) -> Result<TcpListener, AppError> {
    TcpListener::bind(addr)
        .await
        .map_err(AppError::bind(addr.port()))
}

pub fn startup_message(port: u16) -> String {
    format!("Server is running on port {port}")
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        extract::connect_info::MockConnectInfo,
        http::{Request, StatusCode, header},
        response::Response,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    fn test_app() -> App {
        app(router().layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 3000)))))
    }

    async fn get(uri: &str) -> Response {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        test_app().oneshot(request).await.unwrap()
    }

    async fn body_bytes(response: Response) -> axum::body::Bytes {
        axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap()
    }

    fn assert_json_content_type(response: &Response) {
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .unwrap();
        assert!(content_type.starts_with("application/json"));
    }

    #[tokio::test]
    async fn test_root_endpoint() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_json_content_type(&response);

        let body = body_bytes(response).await;
        assert_eq!(
            body.as_ref(),
            br#"{"message":"This is the backend for the continuous assessment"}"#
        );
    }

    #[tokio::test]
    async fn test_users_endpoint() {
        let response = get("/api/v1/users").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_json_content_type(&response);

        let body = body_bytes(response).await;
        assert_eq!(
            body.as_ref(),
            br#"{"message":"This is the users endpoint","data":{"name":"John Doe","email":"john.doe@example.com"}}"#
        );

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            json!({
                "message": "This is the users endpoint",
                "data": {
                    "name": "John Doe",
                    "email": "john.doe@example.com",
                },
            })
        );
    }

    #[tokio::test]
    async fn test_repeated_requests_return_identical_bodies() {
        for uri in ["/", "/api/v1/users"] {
            let first = body_bytes(get(uri).await).await;
            let second = body_bytes(get(uri).await).await;
            assert_eq!(first, second);
        }
    }

    #[tokio::test]
    async fn test_trailing_slash_and_case_are_ignored() {
        let expected = body_bytes(get("/api/v1/users").await).await;

        for uri in ["/api/v1/users/", "/API/V1/USERS", "/Api/V1/Users/"] {
            let response = get(uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert_eq!(body_bytes(response).await, expected, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_root_with_query_string() {
        let response = get("/?Source=Browser").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_startup_message_names_port() {
        assert_eq!(startup_message(3000), "Server is running on port 3000");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = get("/nonexistent").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_json_content_type(&response);
    }

    #[tokio::test]
    async fn test_post_to_users_is_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/users")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_bind_fails_when_port_is_taken() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap();

        let err = bind_listener(addr).await.unwrap_err();
        match &err {
            AppError::BindError { port, .. } => assert_eq!(*port, addr.port()),
            other => panic!("expected BindError, got {other:?}"),
        }
        assert!(
            err.to_string()
                .starts_with(&format!("Port {} is unavailable", addr.port()))
        );
    }

    #[tokio::test]
    async fn test_bind_succeeds_on_free_port() {
        let listener = bind_listener(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }
}
