
use axum::{body::Bytes, extract::State, http::{HeaderMap, Method, Uri}, Json};
use record_store::StoredRecord;
use tracing::debug;

use crate::{ctx::Ctx, model::{request::{CapturedRequest, CapturedRequestBmc}, ModelManager}};
use crate::web::Result;

pub const WELCOME_MESSAGE: &str = "Welcome to Azure Functions!";

pub async fn capture_request(
    ctx: Ctx,
    State(mm): State<ModelManager>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str> {
    debug!("{:<12} - capture_request", "HANDLER");

    let captured = capture(&method, &uri, &headers, &body);
    CapturedRequestBmc::create(&ctx, &mm, Some(captured))?;
    Ok(WELCOME_MESSAGE)
}

pub async fn list_requests(
    ctx: Ctx,
    State(mm): State<ModelManager>,
) -> Result<Json<Vec<StoredRecord<CapturedRequest>>>> {
    debug!("{:<12} - list_requests", "HANDLER");

    let requests = CapturedRequestBmc::list(&ctx, &mm)?;
    Ok(Json(requests))
}

fn capture(method: &Method, uri: &Uri, headers: &HeaderMap, body: &[u8]) -> CapturedRequest {
    CapturedRequest {
        headers: render_headers(headers),
        method: method.to_string(),
        path: uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string()),
        body: String::from_utf8_lossy(body).into_owned(),
    }
}

/// One `name: value` line per header value, in map order.
fn render_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| format!("{}: {}", name, String::from_utf8_lossy(value.as_bytes())))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_capture() {
        let mut headers = HeaderMap::new();
        headers.insert("host", HeaderValue::from_static("localhost:3000"));
        headers.insert("content-type", HeaderValue::from_static("text/plain"));
        let uri: Uri = "/requests?source=test".parse().unwrap();

        let captured = capture(&Method::POST, &uri, &headers, b"hello");

        assert_eq!(captured.method, "POST");
        assert_eq!(captured.path, "/requests?source=test");
        assert_eq!(captured.body, "hello");
        assert!(captured.headers.contains("host: localhost:3000"));
        assert!(captured.headers.contains("content-type: text/plain"));
        assert_eq!(captured.headers.lines().count(), 2);
    }

    #[test]
    fn test_capture_non_utf8_body() {
        let captured = capture(&Method::PUT, &Uri::from_static("/"), &HeaderMap::new(), &[0x66, 0xff, 0x6f]);
        assert_eq!(captured.body, "f\u{fffd}o");
        assert_eq!(captured.headers, "");
    }
}
