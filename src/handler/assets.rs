//! Asset serving module
//!
//! Streams a resolved asset back with its Content-Type and Content-Length.

use crate::gate::ResolvedAsset;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

/// Serve a resolved asset
///
/// Returns `None` when the file can no longer be read, so the caller can
/// fall back to pass-through.
pub async fn serve_asset(asset: &ResolvedAsset, is_head: bool) -> Option<Response<Full<Bytes>>> {
    let content = match fs::read(&asset.path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read asset '{}': {}",
                asset.path.display(),
                e
            ));
            return None;
        }
    };

    logger::log_debug(&format!(
        "[Gate] Serving {} asset {} ({} bytes)",
        asset.class,
        asset.identifier,
        content.len()
    ));

    Some(http::build_asset_response(
        Bytes::from(content),
        asset.content_type,
        is_head,
    ))
}
