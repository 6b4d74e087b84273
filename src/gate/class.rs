//! Asset classification by file extension

use std::fmt;
use std::path::Path;

/// Kind of static asset the gate is willing to serve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetClass {
    Image,
    Script,
    Stylesheet,
    Document,
}

impl AssetClass {
    /// Classify an identifier by its (case-insensitive) extension
    ///
    /// Returns `None` for anything outside `gif|png|jpe?g|js|css|pdf`.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let ext = extension_of(identifier)?.to_ascii_lowercase();
        match ext.as_str() {
            "gif" | "png" | "jpg" | "jpeg" => Some(Self::Image),
            "js" => Some(Self::Script),
            "css" => Some(Self::Stylesheet),
            "pdf" => Some(Self::Document),
            _ => None,
        }
    }

    /// Folder under the asset root holding this class in query-addressed mode
    pub const fn folder(self) -> &'static str {
        match self {
            Self::Image => "img",
            Self::Script => "js",
            Self::Stylesheet => "css",
            Self::Document => "pdf",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Image => "image",
            Self::Script => "script",
            Self::Stylesheet => "stylesheet",
            Self::Document => "document",
        };
        f.write_str(name)
    }
}

/// Extension of the last path component, without the dot
pub fn extension_of(identifier: &str) -> Option<&str> {
    Path::new(identifier).extension().and_then(|e| e.to_str())
}
