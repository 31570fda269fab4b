//! Navigation locations and path matching
//!
//! A [`Location`] is what the router navigates to: a path plus the query
//! string and fragment it arrived with. Only the path takes part in route
//! matching.

use crate::error::{RouterError, RouterResult};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use url::Url;

/// Authority router-relative inputs are resolved under
const PARSE_ORIGIN: &str = "http://localhost";

/// A parsed navigation target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    path: String,
    query: Option<String>,
    hash: Option<String>,
}

impl Location {
    /// Parse a router-relative path or an absolute URL.
    ///
    /// `"/login"`, `"login"`, `"/login?next=/#top"` and
    /// `"http://localhost:8080/login"` are all accepted. The empty string
    /// parses as `/`.
    ///
    /// Input starting with `/` is always a path: `//login` is the path
    /// `//login`, never a URL with host `login`.
    pub fn parse(input: &str) -> RouterResult<Self> {
        let invalid = |reason: String| RouterError::InvalidLocation {
            input: input.to_string(),
            reason,
        };

        let input = input.trim();
        let url = if input.starts_with(['/', '\\']) {
            Url::parse(&format!("{}{}", PARSE_ORIGIN, input))
        } else {
            Url::parse(PARSE_ORIGIN).and_then(|base| base.join(input))
        }
        .map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }

        Ok(Self::from_url(&url))
    }

    /// Take the path, query and fragment of an already parsed URL
    pub fn from_url(url: &Url) -> Self {
        let non_empty = |part: Option<&str>| part.filter(|p| !p.is_empty()).map(str::to_string);

        Self {
            path: url.path().to_string(),
            query: non_empty(url.query()),
            hash: non_empty(url.fragment()),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Render as `path[?query][#hash]`
    pub fn full_path(&self) -> String {
        let mut out = self.path.clone();
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(hash) = &self.hash {
            out.push('#');
            out.push_str(hash);
        }
        out
    }

    /// The root location `/`
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            query: None,
            hash: None,
        }
    }

    /// Replace the path, keeping query and fragment
    pub(crate) fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.full_path())
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl PartialEq<str> for Location {
    fn eq(&self, other: &str) -> bool {
        self.full_path() == other
    }
}

impl PartialEq<&str> for Location {
    fn eq(&self, other: &&str) -> bool {
        self.full_path() == *other
    }
}

/// How route paths are compared with requested paths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// When false, a single trailing slash is ignored (`/login/` matches `/login`)
    #[serde(default)]
    pub strict: bool,
    /// When false, paths are compared ASCII case-insensitively
    #[serde(default)]
    pub sensitive: bool,
}

impl MatchOptions {
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    /// Comparison key for a path under these options
    pub fn normalize<'a>(&self, path: &'a str) -> Cow<'a, str> {
        let trimmed = if !self.strict && path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };

        if self.sensitive {
            Cow::Borrowed(trimmed)
        } else {
            Cow::Owned(trimmed.to_ascii_lowercase())
        }
    }

    /// Whether `path` matches the literal `pattern`
    pub fn matches(&self, pattern: &str, path: &str) -> bool {
        self.normalize(pattern) == self.normalize(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relative_paths() {
        let location = Location::parse("/login").unwrap();
        assert_eq!(location.path(), "/login");
        assert_eq!(location.query(), None);
        assert_eq!(location.hash(), None);

        assert_eq!(Location::parse("login").unwrap().path(), "/login");
        assert_eq!(Location::parse("").unwrap().path(), "/");
        assert_eq!(Location::parse("/a/../login").unwrap().path(), "/login");
    }

    #[test]
    fn test_parse_keeps_query_and_hash() {
        let location = Location::parse("/login?next=%2F#form").unwrap();
        assert_eq!(location.path(), "/login");
        assert_eq!(location.query(), Some("next=%2F"));
        assert_eq!(location.hash(), Some("form"));
        assert_eq!(location.full_path(), "/login?next=%2F#form");
        assert_eq!(location.to_string(), "/login?next=%2F#form");
    }

    #[test]
    fn test_parse_absolute_url() {
        let location = Location::parse("http://localhost:8080/login").unwrap();
        assert_eq!(location.full_path(), "/login");
    }

    #[test]
    fn test_leading_double_slash_stays_a_path() {
        let location = Location::parse("//unknown").unwrap();
        assert_eq!(location.path(), "//unknown");

        let location = Location::parse("/\\login").unwrap();
        assert_eq!(location.path(), "//login");

        let location = Location::parse("http://localhost:8080//unknown").unwrap();
        assert_eq!(location.path(), "//unknown");
    }

    #[test]
    fn test_root_compares_with_str() {
        assert_eq!(Location::root(), "/");
        assert_eq!(Location::default(), Location::parse("").unwrap());
        assert_eq!(format!("{:<4}|", Location::root()), "/   |");
    }

    #[test]
    fn test_parse_rejects_opaque_urls() {
        let err = Location::parse("mailto:someone@example.com").unwrap_err();
        assert!(matches!(err, RouterError::InvalidLocation { .. }));
    }

    #[test]
    fn test_default_matching_is_lenient() {
        let options = MatchOptions::default();
        assert!(options.matches("/login", "/login"));
        assert!(options.matches("/login", "/login/"));
        assert!(options.matches("/login", "/LOGIN"));
        assert!(options.matches("/", "/"));
        assert!(!options.matches("/", "/login"));
        assert!(!options.matches("/login", "/login/extra"));
    }

    #[test]
    fn test_strict_and_sensitive_matching() {
        let options = MatchOptions::default().strict(true).sensitive(true);
        assert!(options.matches("/login", "/login"));
        assert!(!options.matches("/login", "/login/"));
        assert!(!options.matches("/login", "/Login"));
    }
}
