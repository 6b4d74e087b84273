//! Inbound request view used by the gate

use hyper::Uri;
use percent_encoding::percent_decode_str;

/// Path and raw query of an inbound request URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    path: String,
    query: Option<String>,
}

impl AssetRequest {
    pub fn new(path: impl Into<String>, query: Option<impl Into<String>>) -> Self {
        Self {
            path: path.into(),
            query: query.map(Into::into),
        }
    }

    /// Build from a hyper `Uri`
    pub fn from_uri(uri: &Uri) -> Self {
        Self::new(uri.path(), uri.query())
    }

    /// Parse a raw request target such as `/a/b.png?x=1`
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('?') {
            Some((path, query)) => Self::new(path, Some(query)),
            None => Self::new(raw, None::<String>),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Look up a query parameter with form-decoding semantics
    ///
    /// `+` decodes to a space and percent-escapes are decoded. When a key
    /// appears more than once the last value wins.
    pub fn query_value(&self, key: &str) -> Option<String> {
        let query = self.query.as_deref()?;
        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(k) == key).then(|| decode_component(v))
            })
            .last()
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
