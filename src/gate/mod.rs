//! Asset gate module
//!
//! Decides whether a request URI addresses a permitted static asset and,
//! if so, which file it maps to and which Content-Type to advertise.
//! Resolution never touches response state: serving the file is the
//! caller's job, and anything that does not resolve is handed back as-is.

mod class;
mod error;
mod location;
mod policy;
mod request;

pub use class::AssetClass;
pub use error::GateError;
pub use location::AssetLocation;
pub use policy::{AssetPolicy, PolicyConfig, PolicyMode};
pub use request::AssetRequest;

use crate::config::AssetsConfig;
use crate::http::mime;
use crate::logger;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How the asset identifier is carried in the request
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AddressingMode {
    /// `/<...prefix><identifier>`, file at `<root>/<identifier>`
    #[default]
    Path,
    /// `/<...prefix>?<key>=<identifier>`, file at `<root>/<folder>/<identifier>`
    Query,
}

/// A request that resolved to a servable file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub path: PathBuf,
    pub identifier: String,
    pub class: AssetClass,
    pub content_type: &'static str,
}

/// Result of filtering a request through the gate
///
/// `PassThrough` carries the caller's continuation token back untouched.
#[derive(Debug)]
pub enum GateOutcome<T> {
    Serve(ResolvedAsset),
    PassThrough(T),
}

/// Static asset gate, immutable after construction
#[derive(Debug, Clone)]
pub struct AssetGate {
    location: AssetLocation,
    mode: AddressingMode,
    query_key: String,
    policy: AssetPolicy,
}

impl AssetGate {
    pub fn new(
        location: AssetLocation,
        mode: AddressingMode,
        query_key: impl Into<String>,
        policy: AssetPolicy,
    ) -> Result<Self, GateError> {
        let query_key = query_key.into();
        if location.root().as_os_str().is_empty() {
            return Err(GateError::EmptyRoot);
        }
        if location.prefix().trim().is_empty() {
            return Err(GateError::EmptyPrefix);
        }
        if mode == AddressingMode::Query && query_key.is_empty() {
            return Err(GateError::EmptyQueryKey);
        }
        Ok(Self {
            location,
            mode,
            query_key,
            policy,
        })
    }

    pub fn from_config(config: &AssetsConfig) -> Result<Self, GateError> {
        Self::new(
            AssetLocation::new(config.prefix.clone(), config.root.clone()),
            config.mode,
            config.query_key.clone(),
            AssetPolicy::from_config(&config.policy),
        )
    }

    pub const fn mode(&self) -> AddressingMode {
        self.mode
    }

    pub const fn location(&self) -> &AssetLocation {
        &self.location
    }

    /// Filter a request: serve it, or hand the token back unchanged
    pub fn filter<T>(&self, request: &AssetRequest, token: T) -> GateOutcome<T> {
        match self.resolve(request) {
            Some(asset) => GateOutcome::Serve(asset),
            None => GateOutcome::PassThrough(token),
        }
    }

    /// Resolve a request to an asset; `None` means not applicable
    pub fn resolve(&self, request: &AssetRequest) -> Option<ResolvedAsset> {
        let identifier = self.identifier_for(request)?;
        if identifier.is_empty() {
            return None;
        }

        let Some(class) = AssetClass::from_identifier(&identifier) else {
            logger::log_debug(&format!("[Gate] Unrecognised extension: {identifier}"));
            return None;
        };

        let relative = match self.mode {
            AddressingMode::Path => PathBuf::from(&identifier),
            AddressingMode::Query => Path::new(class.folder()).join(&identifier),
        };
        let Some(path) = self.location.join(&relative) else {
            logger::log_warning(&format!(
                "Asset identifier escapes the asset root: {identifier}"
            ));
            return None;
        };

        if !path.is_file() {
            logger::log_debug(&format!("[Gate] No such asset: {}", path.display()));
            return None;
        }

        if !self.policy.permits(&identifier) {
            logger::log_debug(&format!("[Gate] Denied by policy: {identifier}"));
            return None;
        }

        let content_type = class::extension_of(&identifier).and_then(mime::content_type_for)?;

        Some(ResolvedAsset {
            path,
            identifier,
            class,
            content_type,
        })
    }

    /// Extract the identifier if the request targets the asset namespace
    fn identifier_for(&self, request: &AssetRequest) -> Option<String> {
        let tail = self.location.strip_prefix(request.path())?;
        match self.mode {
            AddressingMode::Path => Some(tail.trim_start_matches('/').to_string()),
            AddressingMode::Query => request.query_value(&self.query_key),
        }
    }
}
