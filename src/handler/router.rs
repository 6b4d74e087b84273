//! Request dispatch module
//!
//! Entry point for HTTP request processing: offers each request to the asset
//! gate and hands anything it declines to the host fallback unchanged.

use crate::config::AppState;
use crate::gate::{AssetRequest, GateOutcome};
use crate::handler::{assets, fallback};
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let access_log = state.cached_access_log.load(Ordering::Relaxed);
    let mut entry = access_log.then(|| access_entry(&req, remote_addr));

    let (response, gate_hit) = dispatch(req, &state).await;

    if let Some(entry) = entry.as_mut() {
        entry.status = response.status().as_u16();
        entry.body_bytes = usize::try_from(response.body().size_hint().exact().unwrap_or(0))
            .unwrap_or(usize::MAX);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        entry.gate_hit = gate_hit;
        logger::log_access(entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Offer the request to the gate, falling back to the host on pass-through
///
/// Returns the response and whether the gate served it.
pub async fn dispatch<B>(req: Request<B>, state: &AppState) -> (Response<Full<Bytes>>, bool) {
    let is_head = *req.method() == Method::HEAD;

    // Only GET/HEAD are candidates for asset serving
    if !matches!(*req.method(), Method::GET | Method::HEAD) {
        return (fallback::respond(&req, &state.config.fallback), false);
    }

    let asset_req = AssetRequest::from_uri(req.uri());
    let (method, uri) = (req.method().clone(), req.uri().clone());
    match state.gate.filter(&asset_req, req) {
        GateOutcome::Serve(asset) => match assets::serve_asset(&asset, is_head).await {
            Some(resp) => (resp, true),
            None => (
                fallback::respond_parts(&method, &uri, &state.config.fallback),
                false,
            ),
        },
        GateOutcome::PassThrough(req) => (fallback::respond(&req, &state.config.fallback), false),
    }
}

fn access_entry<B>(req: &Request<B>, remote_addr: SocketAddr) -> AccessLogEntry {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        remote_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = match req.version() {
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        _ => "1.1",
    }
    .to_string();
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry
}
