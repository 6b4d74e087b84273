//! Allow/deny policy over asset identifiers

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which identifiers the gate may serve
///
/// An absent list means the mode's neutral behaviour: an allow policy
/// without a list permits everything, a deny policy without a list
/// denies nothing. Allow entries must equal the identifier exactly; deny
/// entries also match on the identifier's file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetPolicy {
    Allow(Option<Vec<String>>),
    Deny(Option<Vec<String>>),
}

impl Default for AssetPolicy {
    fn default() -> Self {
        Self::Allow(None)
    }
}

impl AssetPolicy {
    /// Whether the identifier may be served under this policy
    pub fn permits(&self, identifier: &str) -> bool {
        match self {
            Self::Allow(None) | Self::Deny(None) => true,
            Self::Allow(Some(list)) => list.iter().any(|entry| entry == identifier),
            Self::Deny(Some(list)) => !is_denied(list, identifier),
        }
    }

    pub fn from_config(config: &PolicyConfig) -> Self {
        match config.mode {
            PolicyMode::Allow => Self::Allow(config.files.clone()),
            PolicyMode::Deny => Self::Deny(config.files.clone()),
        }
    }
}

/// A deny entry matches the full identifier or its file name
fn is_denied(list: &[String], identifier: &str) -> bool {
    let file_name = Path::new(identifier)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(identifier);
    list.iter()
        .any(|entry| entry == identifier || entry == file_name)
}

/// Policy section of the configuration file
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    #[serde(default)]
    pub mode: PolicyMode,
    #[serde(default)]
    pub files: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PolicyMode {
    #[default]
    Allow,
    Deny,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| (*s).to_string()).collect())
    }

    #[test]
    fn test_no_list_is_neutral() {
        assert!(AssetPolicy::Allow(None).permits("anything.js"));
        assert!(AssetPolicy::Deny(None).permits("anything.js"));
    }

    #[test]
    fn test_allow_list() {
        let policy = AssetPolicy::Allow(list(&["a.js"]));
        assert!(policy.permits("a.js"));
        assert!(!policy.permits("b.js"));
    }

    #[test]
    fn test_deny_list() {
        let policy = AssetPolicy::Deny(list(&["secret.pdf"]));
        assert!(!policy.permits("secret.pdf"));
        assert!(policy.permits("public.pdf"));
    }

    #[test]
    fn test_deny_matches_nested_file_name() {
        let policy = AssetPolicy::Deny(list(&["secret.pdf"]));
        assert!(!policy.permits("docs/secret.pdf"));
        assert!(!policy.permits("secret.pdf"));
    }

    #[test]
    fn test_allow_requires_exact_identifier() {
        let policy = AssetPolicy::Allow(list(&["a.js"]));
        assert!(!policy.permits("private/a.js"));

        let policy = AssetPolicy::Allow(list(&["img/logo.png"]));
        assert!(policy.permits("img/logo.png"));
        assert!(!policy.permits("other/logo.png"));
        assert!(!policy.permits("logo.png"));
    }

    #[test]
    fn test_empty_allow_list_denies_everything() {
        let policy = AssetPolicy::Allow(Some(Vec::new()));
        assert!(!policy.permits("a.js"));
    }

    #[test]
    fn test_from_config() {
        let cfg = PolicyConfig {
            mode: PolicyMode::Deny,
            files: list(&["x.css"]),
        };
        assert_eq!(AssetPolicy::from_config(&cfg), AssetPolicy::Deny(list(&["x.css"])));
        assert_eq!(
            AssetPolicy::from_config(&PolicyConfig::default()),
            AssetPolicy::Allow(None)
        );
    }
}
