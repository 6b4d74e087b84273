// Application state module
// Shared, read-only after startup except for the shutdown signal

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tokio::sync::Notify;

use super::types::Config;
use crate::gate::{AssetGate, GateError};

/// Application state
pub struct AppState {
    pub config: Config,
    pub gate: AssetGate,
    pub shutdown: Arc<Notify>,

    // Cached config values for fast access
    pub cached_access_log: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, GateError> {
        let gate = AssetGate::from_config(&config.assets)?;
        Ok(Self {
            config: config.clone(),
            gate,
            shutdown: Arc::new(Notify::new()),
            cached_access_log: Arc::new(AtomicBool::new(config.logging.access_log)),
        })
    }
}
