//! Hash-based locations and page URLs.
//!
//! URL format: `#/Key/optional/sub/path`. The shell only looks at the path;
//! query strings are discarded when parsing.

/// Path of the page currently shown, always starting with `/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentLocation {
    path: String,
}

impl Default for CurrentLocation {
    fn default() -> Self {
        Self::root()
    }
}

impl CurrentLocation {
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
        }
    }

    /// Build from a plain path such as `/Reports/Q1`.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_start_matches('/');
        Self {
            path: format!("/{}", path),
        }
    }

    /// Build from a URL hash such as `#/Reports/Q1?tab=2`.
    pub fn from_hash(hash: &str) -> Self {
        Self::from_path(hash.strip_prefix('#').unwrap_or(hash))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path == "/"
    }

    /// First non-empty path segment (`Reports` for `/Reports/Q1`).
    pub fn first_segment(&self) -> Option<&str> {
        self.path.split('/').find(|s| !s.is_empty())
    }
}

/// Resolve a logical route key to a navigable href.
pub fn page_url(route_key: &str) -> String {
    format!("#/{}", route_key.replace(' ', "-"))
}
