//! HTTP response building module
//!
//! Builders for the responses the gate and its host fallback emit.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 response for a served asset
///
/// `Content-Length` always carries the file size, even when the body is
/// dropped for HEAD.
pub fn build_asset_response(data: Bytes, content_type: &str, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build redirect response; unsupported codes fall back to 302
pub fn build_redirect_response(target: &str, code: u16) -> Response<Full<Bytes>> {
    let status = match code {
        301 | 302 | 307 | 308 => code,
        _ => 302,
    };

    Response::builder()
        .status(status)
        .header("Location", target)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("Redirecting...")))
        .unwrap_or_else(|e| {
            log_build_error(&status.to_string(), &e);
            Response::new(Full::new(Bytes::from("Redirecting...")))
        })
}

/// Build a fixed response with optional body and content type
pub fn build_direct_response(
    status: u16,
    body: Option<&str>,
    content_type: Option<&str>,
) -> Response<Full<Bytes>> {
    let body = body.map(|b| Bytes::from(b.to_owned())).unwrap_or_default();

    Response::builder()
        .status(status)
        .header("Content-Type", content_type.unwrap_or("text/plain"))
        .header("Content-Length", body.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(&status.to_string(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_asset_response_headers_and_body() {
        let resp = build_asset_response(Bytes::from_static(b"body{}"), "text/css", false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "text/css");
        assert_eq!(resp.headers()["content-length"], "6");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"body{}");
    }

    #[tokio::test]
    async fn test_asset_response_head_keeps_length() {
        let resp = build_asset_response(Bytes::from_static(b"abc"), "application/javascript", true);
        assert_eq!(resp.headers()["content-length"], "3");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[test]
    fn test_redirect_codes() {
        assert_eq!(build_redirect_response("/", 301).status(), 301);
        assert_eq!(build_redirect_response("/", 308).status(), 308);
        assert_eq!(build_redirect_response("/", 200).status(), 302);
        assert_eq!(build_redirect_response("/home", 302).headers()["location"], "/home");
    }

    #[test]
    fn test_direct_response() {
        let resp = build_direct_response(503, Some("down"), None);
        assert_eq!(resp.status(), 503);
        assert_eq!(resp.headers()["content-type"], "text/plain");
        assert_eq!(resp.headers()["content-length"], "4");

        let resp = build_direct_response(1000, None, Some("text/html"));
        assert_eq!(resp.status(), 200);
    }
}
