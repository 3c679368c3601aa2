use axum::http::{Request, Uri, uri::PathAndQuery};

/// Lowercase the request path so routes match regardless of letter case.
/// The query string is left untouched.
pub fn lowercase_path<B>(mut request: Request<B>) -> Request<B> {
    if let Some(uri) = lowercased_uri(request.uri()) {
        *request.uri_mut() = uri;
    }

    request
}

fn lowercased_uri(uri: &Uri) -> Option<Uri> {
    let path = uri.path();
    if !path.bytes().any(|b| b.is_ascii_uppercase()) {
        return None;
    }

    let path = path.to_ascii_lowercase();
    let path_and_query = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path,
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).ok()?);

    Uri::from_parts(parts).ok()
}
