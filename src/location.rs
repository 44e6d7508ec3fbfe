//! Locations in the walked namespace and resolution of root identifiers

use std::fmt;
use std::path::{Path, PathBuf};

/// Handle to one location in the namespace, stored as a canonical URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    uri: String,
}

impl Location {
    /// Wrap a URI that is already known to be canonical (e.g. a target URI
    /// reported by a provider).
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// Resolve a command-line identifier.
    ///
    /// Anything carrying a URI scheme is taken verbatim. Everything else is a
    /// local path, made absolute against the current directory.
    pub fn from_arg(arg: &str) -> Self {
        if has_scheme(arg) {
            return Self::from_uri(arg);
        }
        let path = Path::new(arg);
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("/"))
                .join(path)
        };
        // Drops `.` components
        let absolute: PathBuf = absolute.components().collect();
        Self::from_path(&absolute)
    }

    /// Build a `file://` location for a local path.
    pub fn from_path(path: &Path) -> Self {
        let mut display = path.to_string_lossy().into_owned();
        if !display.starts_with('/') {
            display.insert(0, '/');
        }
        Self::from_uri(format!("file://{}", display))
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The scheme part of the URI, without the trailing colon.
    pub fn scheme(&self) -> &str {
        self.uri.split_once(':').map(|(s, _)| s).unwrap_or("")
    }

    /// The location of the child called `name`.
    pub fn child(&self, name: &str) -> Self {
        if self.uri.ends_with('/') {
            Self::from_uri(format!("{}{}", self.uri, name))
        } else {
            Self::from_uri(format!("{}/{}", self.uri, name))
        }
    }

    /// Local filesystem path for `file://` locations.
    pub fn to_path(&self) -> Option<PathBuf> {
        let rest = self.uri.strip_prefix("file://")?;
        if rest.is_empty() {
            Some(PathBuf::from("/"))
        } else {
            Some(PathBuf::from(rest))
        }
    }

    /// Name segments after the given prefix, or `None` when the location is
    /// not below `prefix`.
    pub fn segments_below<'a>(&'a self, prefix: &str) -> Option<Vec<&'a str>> {
        let rest = self.uri.strip_prefix(prefix)?;
        if !prefix.ends_with('/') && !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }
        Some(rest.split('/').filter(|s| !s.is_empty()).collect())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

/// RFC 3986 scheme: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) followed by ':'.
fn has_scheme(arg: &str) -> bool {
    let Some((scheme, _)) = arg.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_root_is_taken_verbatim() {
        let loc = Location::from_arg("network:///");
        assert_eq!(loc.uri(), "network:///");
        assert_eq!(loc.scheme(), "network");
    }

    #[test]
    fn test_paths_become_file_uris() {
        let loc = Location::from_arg("/tmp/share");
        assert_eq!(loc.uri(), "file:///tmp/share");
        assert_eq!(loc.to_path(), Some(PathBuf::from("/tmp/share")));

        let relative = Location::from_arg("some/dir");
        assert!(relative.uri().starts_with("file:///"));
        assert!(relative.uri().ends_with("/some/dir"));

        let here = Location::from_arg(".");
        assert!(!here.uri().ends_with("/."), "{}", here);
    }

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("smb://host/share"));
        assert!(has_scheme("dns-sd://local/"));
        assert!(!has_scheme("relative/path"));
        assert!(!has_scheme("1abc:foo"));
        assert!(!has_scheme(":nothing"));
    }

    #[test]
    fn test_child_joins_with_single_slash() {
        assert_eq!(
            Location::from_uri("network:///").child("host").uri(),
            "network:///host"
        );
        assert_eq!(
            Location::from_uri("smb://host/share").child("docs").uri(),
            "smb://host/share/docs"
        );
    }

    #[test]
    fn test_root_path_round_trips() {
        let loc = Location::from_path(Path::new("/"));
        assert_eq!(loc.uri(), "file:///");
        assert_eq!(loc.to_path(), Some(PathBuf::from("/")));
    }

    #[test]
    fn test_segments_below() {
        let loc = Location::from_uri("smb://host/share/docs/readme");
        assert_eq!(
            loc.segments_below("smb://host/share"),
            Some(vec!["docs", "readme"])
        );
        assert_eq!(loc.segments_below("smb://host/sha"), None);
        assert_eq!(loc.segments_below("network:///"), None);
        assert_eq!(
            Location::from_uri("network:///").segments_below("network:///"),
            Some(vec![])
        );
    }
}
