//! Virtual prefix to filesystem root mapping

use std::path::{Component, Path, PathBuf};

/// Where assets live: a prefix token in request paths and a real root directory
#[derive(Debug, Clone)]
pub struct AssetLocation {
    prefix: String,
    /// Lower-cased prefix, built once for case-insensitive search
    needle: String,
    root: PathBuf,
}

impl AssetLocation {
    pub fn new(prefix: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        let prefix = prefix.into();
        let needle = prefix.to_ascii_lowercase();
        Self {
            prefix,
            needle,
            root: root.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find the last segment-anchored occurrence of the prefix token
    ///
    /// Matching is ASCII case-insensitive. Returns the byte offset just
    /// past the match, or `None` if the path is outside the namespace.
    pub fn find_prefix_end(&self, path: &str) -> Option<usize> {
        if self.needle.is_empty() {
            return None;
        }
        let haystack = path.to_ascii_lowercase();
        let mut search_end = haystack.len();
        while let Some(start) = haystack[..search_end].rfind(&self.needle) {
            let end = start + self.needle.len();
            if self.is_segment_anchored(&haystack, start, end) {
                return Some(end);
            }
            if start == 0 {
                break;
            }
            search_end = end - 1;
            while !haystack.is_char_boundary(search_end) {
                search_end -= 1;
            }
        }
        None
    }

    /// Substring of the path after the prefix token
    pub fn strip_prefix<'a>(&self, path: &'a str) -> Option<&'a str> {
        self.find_prefix_end(path).map(|end| &path[end..])
    }

    /// Join a relative identifier onto the root, refusing anything that climbs out
    pub fn join(&self, relative: &Path) -> Option<PathBuf> {
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        safe.then(|| self.root.join(relative))
    }

    fn is_segment_anchored(&self, haystack: &str, start: usize, end: usize) -> bool {
        let bytes = haystack.as_bytes();
        let starts_ok = self.needle.starts_with('/') || start == 0 || bytes[start - 1] == b'/';
        let ends_ok = self.needle.ends_with('/') || end == bytes.len() || bytes[end] == b'/';
        starts_ok && ends_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefix_takes_last_occurrence() {
        let loc = AssetLocation::new("/assets/", "/srv");
        assert_eq!(loc.strip_prefix("/assets/img/logo.png"), Some("img/logo.png"));
        assert_eq!(
            loc.strip_prefix("/plugin/assets/x/assets/app.js"),
            Some("app.js")
        );
        assert_eq!(loc.strip_prefix("/other/logo.png"), None);
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        let loc = AssetLocation::new("/assets/", "/srv");
        assert_eq!(loc.strip_prefix("/ASSETS/Logo.PNG"), Some("Logo.PNG"));
    }

    #[test]
    fn test_bare_token_requires_segment_boundary() {
        let loc = AssetLocation::new("myassets", "/srv");
        assert_eq!(loc.strip_prefix("/myassets/a.js"), Some("/a.js"));
        assert_eq!(loc.strip_prefix("/myassetsFoo/a.js"), None);
        assert_eq!(loc.strip_prefix("/xmyassets/a.js"), None);
    }

    #[test]
    fn test_spoofed_later_segment_falls_back_to_earlier_match() {
        let loc = AssetLocation::new("myassets", "/srv");
        assert_eq!(
            loc.strip_prefix("/myassets/dir/myassetsFoo.js"),
            Some("/dir/myassetsFoo.js")
        );
    }

    #[test]
    fn test_empty_prefix_never_matches() {
        let loc = AssetLocation::new("", "/srv");
        assert_eq!(loc.strip_prefix("/anything"), None);
    }

    #[test]
    fn test_join_rejects_parent_dirs() {
        let loc = AssetLocation::new("/assets/", "/srv/static");
        assert_eq!(
            loc.join(Path::new("img/logo.png")),
            Some(PathBuf::from("/srv/static/img/logo.png"))
        );
        assert_eq!(loc.join(Path::new("../etc/passwd")), None);
        assert_eq!(loc.join(Path::new("img/../../etc/passwd")), None);
        assert_eq!(loc.join(Path::new("/etc/passwd")), None);
    }
}
