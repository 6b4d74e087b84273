//! Host fallback for requests the gate passes through

use crate::config::FallbackConfig;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Uri};

/// Answer a passed-through request with the configured host behaviour
pub fn respond<B>(req: &Request<B>, fallback: &FallbackConfig) -> Response<Full<Bytes>> {
    respond_parts(req.method(), req.uri(), fallback)
}

pub fn respond_parts(method: &Method, uri: &Uri, fallback: &FallbackConfig) -> Response<Full<Bytes>> {
    logger::log_debug(&format!("[Host] Pass-through: {method} {uri}"));
    match fallback {
        FallbackConfig::NotFound => http::build_404_response(),
        FallbackConfig::Redirect { target, code } => http::build_redirect_response(target, *code),
        FallbackConfig::Direct {
            status,
            body,
            content_type,
        } => http::build_direct_response(*status, body.as_deref(), content_type.as_deref()),
    }
}
