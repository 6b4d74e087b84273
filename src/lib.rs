//! Static asset gate
//!
//! Decides whether a request addresses a permitted static asset under a
//! configured directory and serves it, or passes the request back untouched
//! so the host's routing can handle it.

pub mod config;
pub mod gate;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use gate::{AssetGate, AssetRequest, GateOutcome, ResolvedAsset};
