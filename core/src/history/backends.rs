//! Built-in history backends

use super::{HistoryBackend, HistoryMode, HistoryStack};
use crate::error::RouterResult;
use crate::location::Location;

/// Normalize a base path to `/segment[/segment..]` without a trailing slash,
/// or `/` at the root
fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Prefix prepended to router locations, empty at the root
fn base_prefix(base: &str) -> &str {
    if base == "/" {
        ""
    } else {
        base
    }
}

/// Strip the base from a URL path; paths outside the base are kept whole
fn strip_base<'a>(base: &str, path: &'a str) -> &'a str {
    let prefix = base_prefix(base);
    if prefix.is_empty() {
        return path;
    }

    match path.strip_prefix(prefix) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

/// Navigation with clean URLs (`/app/login`).
///
/// Serves both web and memory mode: they render and read URLs the same way
/// and differ only in whether a browser is kept in sync, which happens
/// outside the router.
#[derive(Debug, Clone)]
pub struct PathHistory {
    mode: HistoryMode,
    base: String,
    stack: HistoryStack,
}

impl PathHistory {
    /// Browser-history backed navigation
    pub fn web(base: &str, capacity: usize) -> Self {
        Self::with_mode(HistoryMode::Web, base, capacity)
    }

    /// In-process navigation, no browser involved
    pub fn memory(base: &str, capacity: usize) -> Self {
        Self::with_mode(HistoryMode::Memory, base, capacity)
    }

    fn with_mode(mode: HistoryMode, base: &str, capacity: usize) -> Self {
        Self {
            mode,
            base: normalize_base(base),
            stack: HistoryStack::new(Location::root(), capacity),
        }
    }
}

impl HistoryBackend for PathHistory {
    fn mode(&self) -> HistoryMode {
        self.mode
    }

    fn base(&self) -> &str {
        &self.base
    }

    fn stack(&self) -> &HistoryStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut HistoryStack {
        &mut self.stack
    }

    fn href(&self, location: &str) -> String {
        format!("{}{}", base_prefix(&self.base), location)
    }

    fn parse_url(&self, url: &str) -> RouterResult<Location> {
        let location = Location::parse(url)?;
        let path = strip_base(&self.base, location.path()).to_string();
        Ok(location.with_path(path))
    }
}

/// Navigation kept in the URL fragment (`/app/#/login`)
#[derive(Debug, Clone)]
pub struct HashHistory {
    base: String,
    stack: HistoryStack,
}

impl HashHistory {
    pub fn new(base: &str, capacity: usize) -> Self {
        Self {
            base: normalize_base(base),
            stack: HistoryStack::new(Location::root(), capacity),
        }
    }
}

impl HistoryBackend for HashHistory {
    fn mode(&self) -> HistoryMode {
        HistoryMode::Hash
    }

    fn base(&self) -> &str {
        &self.base
    }

    fn stack(&self) -> &HistoryStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut HistoryStack {
        &mut self.stack
    }

    fn href(&self, location: &str) -> String {
        format!("{}/#{}", base_prefix(&self.base), location)
    }

    fn parse_url(&self, url: &str) -> RouterResult<Location> {
        match Location::parse(url)?.hash() {
            Some(fragment) => Location::parse(fragment),
            None => Location::parse("/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::DEFAULT_CAPACITY;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(""), "/");
        assert_eq!(normalize_base("/"), "/");
        assert_eq!(normalize_base("app"), "/app");
        assert_eq!(normalize_base("/app/"), "/app");
        assert_eq!(normalize_base("/quiz/app//"), "/quiz/app");
    }

    #[test]
    fn test_web_href_and_parse() {
        let history = PathHistory::web("/", DEFAULT_CAPACITY);
        assert_eq!(history.href("/login"), "/login");
        assert_eq!(
            history.parse_url("http://localhost:8080/login?next=%2F").unwrap().full_path(),
            "/login?next=%2F"
        );

        let history = PathHistory::web("/app/", DEFAULT_CAPACITY);
        assert_eq!(history.base(), "/app");
        assert_eq!(history.href("/login"), "/app/login");
        assert_eq!(history.href("/"), "/app/");
        assert_eq!(history.parse_url("/app/login").unwrap().path(), "/login");
        assert_eq!(history.parse_url("/app").unwrap().path(), "/");
        assert_eq!(history.parse_url("/application").unwrap().path(), "/application");
    }

    #[test]
    fn test_double_slash_is_not_a_host() {
        let history = PathHistory::web("/", DEFAULT_CAPACITY);
        assert_eq!(
            history.parse_url("http://localhost:8080//unknown").unwrap().path(),
            "//unknown"
        );

        let history = HashHistory::new("/", DEFAULT_CAPACITY);
        assert_eq!(
            history.parse_url("http://localhost:8080/#//unknown").unwrap().path(),
            "//unknown"
        );
    }

    #[test]
    fn test_hash_href_and_parse() {
        let history = HashHistory::new("/", DEFAULT_CAPACITY);
        assert_eq!(history.href("/login"), "/#/login");
        assert_eq!(
            history.parse_url("http://localhost:8080/#/login").unwrap().path(),
            "/login"
        );
        assert_eq!(history.parse_url("http://localhost:8080/").unwrap().path(), "/");

        let history = HashHistory::new("/app", DEFAULT_CAPACITY);
        assert_eq!(history.href("/"), "/app/#/");
        assert_eq!(history.parse_url("/app/#/login?x=1").unwrap().full_path(), "/login?x=1");
    }

    #[test]
    fn test_memory_shares_web_urls() {
        let web = PathHistory::web("/app", DEFAULT_CAPACITY);
        let mut history = PathHistory::memory("/app", DEFAULT_CAPACITY);
        assert_eq!(history.mode(), HistoryMode::Memory);
        assert_eq!(web.mode(), HistoryMode::Web);
        assert_eq!(history.href("/login"), web.href("/login"));
        assert_eq!(
            history.parse_url("/app/login").unwrap(),
            web.parse_url("/app/login").unwrap()
        );

        history.push(Location::parse("/login").unwrap());
        assert_eq!(history.location(), "/login");
        assert!(history.go(-1));
        assert_eq!(history.location(), "/");
        assert!(history.can_go(1));
    }
}
