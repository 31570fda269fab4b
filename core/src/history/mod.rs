//! History strategies and navigation-history backends
//!
//! A [`HistoryStrategy`] selects how navigation state maps onto the browser
//! URL. It is a [`HistoryFactory`]: the router asks it for a fresh
//! [`HistoryBackend`] when it is built.

pub mod backends;
pub mod stack;

pub use backends::{HashHistory, PathHistory};
pub use stack::{HistoryStack, DEFAULT_CAPACITY};

use crate::error::RouterResult;
use crate::location::Location;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of history backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryMode {
    /// Browser history API, clean URLs
    Web,
    /// Location kept in the URL fragment
    Hash,
    /// In-process only, no URL synchronization
    Memory,
}

impl HistoryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryMode::Web => "web",
            HistoryMode::Hash => "hash",
            HistoryMode::Memory => "memory",
        }
    }
}

impl fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" | "history" => Ok(HistoryMode::Web),
            "hash" => Ok(HistoryMode::Hash),
            "memory" => Ok(HistoryMode::Memory),
            other => Err(format!(
                "Unknown history mode '{}', expected web, hash or memory",
                other
            )),
        }
    }
}

fn default_base() -> String {
    "/".to_string()
}

/// History strategy selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum HistoryStrategy {
    Web {
        #[serde(default = "default_base")]
        base: String,
    },
    Hash {
        #[serde(default = "default_base")]
        base: String,
    },
    Memory {
        #[serde(default = "default_base")]
        base: String,
    },
}

impl HistoryStrategy {
    pub fn web() -> Self {
        HistoryStrategy::Web { base: default_base() }
    }

    pub fn hash() -> Self {
        HistoryStrategy::Hash { base: default_base() }
    }

    pub fn memory() -> Self {
        HistoryStrategy::Memory { base: default_base() }
    }

    /// Strategy of the given mode rooted at `base`
    pub fn from_mode(mode: HistoryMode, base: impl Into<String>) -> Self {
        let base = base.into();
        match mode {
            HistoryMode::Web => HistoryStrategy::Web { base },
            HistoryMode::Hash => HistoryStrategy::Hash { base },
            HistoryMode::Memory => HistoryStrategy::Memory { base },
        }
    }

    /// Same mode with a different base
    pub fn with_base(self, base: impl Into<String>) -> Self {
        Self::from_mode(self.mode(), base)
    }

    pub fn mode(&self) -> HistoryMode {
        match self {
            HistoryStrategy::Web { .. } => HistoryMode::Web,
            HistoryStrategy::Hash { .. } => HistoryMode::Hash,
            HistoryStrategy::Memory { .. } => HistoryMode::Memory,
        }
    }

    pub fn base(&self) -> &str {
        match self {
            HistoryStrategy::Web { base }
            | HistoryStrategy::Hash { base }
            | HistoryStrategy::Memory { base } => base,
        }
    }
}

impl Default for HistoryStrategy {
    fn default() -> Self {
        Self::web()
    }
}

/// Capability to create a navigation-history backend
pub trait HistoryFactory {
    /// Create a backend positioned at `/`, keeping at most `capacity` entries
    fn create(&self, capacity: usize) -> Box<dyn HistoryBackend>;
}

impl HistoryFactory for HistoryStrategy {
    fn create(&self, capacity: usize) -> Box<dyn HistoryBackend> {
        match self {
            HistoryStrategy::Web { base } => Box::new(PathHistory::web(base, capacity)),
            HistoryStrategy::Hash { base } => Box::new(HashHistory::new(base, capacity)),
            HistoryStrategy::Memory { base } => Box::new(PathHistory::memory(base, capacity)),
        }
    }
}

/// Tracks navigation state and maps router locations to and from URLs.
///
/// Entries are parsed [`Location`]s and are never parsed again once stored.
/// The built-in backends keep them in a [`HistoryStack`] and only differ in
/// how they render and read URLs.
pub trait HistoryBackend: Send + Sync + fmt::Debug {
    fn mode(&self) -> HistoryMode;

    /// Base path the application is served under, `/` at the root
    fn base(&self) -> &str;

    fn stack(&self) -> &HistoryStack;

    fn stack_mut(&mut self) -> &mut HistoryStack;

    /// URL a link to the router-relative `location` should point at
    fn href(&self, location: &str) -> String;

    /// Router location encoded in a browser URL
    fn parse_url(&self, url: &str) -> RouterResult<Location>;

    /// Current router location
    fn location(&self) -> &Location {
        self.stack().current()
    }

    fn entries(&self) -> &[Location] {
        self.stack().entries()
    }

    fn push(&mut self, location: Location) {
        self.stack_mut().push(location);
    }

    fn replace(&mut self, location: Location) {
        self.stack_mut().replace(location);
    }

    fn go(&mut self, delta: isize) -> bool {
        self.stack_mut().go(delta)
    }

    fn can_go(&self, delta: isize) -> bool {
        self.stack().can_go(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("web".parse::<HistoryMode>(), Ok(HistoryMode::Web));
        assert_eq!("history".parse::<HistoryMode>(), Ok(HistoryMode::Web));
        assert_eq!(" Hash ".parse::<HistoryMode>(), Ok(HistoryMode::Hash));
        assert_eq!("memory".parse::<HistoryMode>(), Ok(HistoryMode::Memory));
        assert!("browser".parse::<HistoryMode>().is_err());
        assert_eq!(HistoryMode::Hash.to_string(), "hash");
    }

    #[test]
    fn test_strategy_serde_shape() {
        let strategy: HistoryStrategy = serde_json::from_str(r#"{"mode": "hash"}"#).unwrap();
        assert_eq!(strategy, HistoryStrategy::hash());

        let strategy: HistoryStrategy =
            serde_json::from_str(r#"{"mode": "web", "base": "/quiz"}"#).unwrap();
        assert_eq!(strategy.mode(), HistoryMode::Web);
        assert_eq!(strategy.base(), "/quiz");

        assert!(serde_json::from_str::<HistoryStrategy>(r#"{"mode": "abstract"}"#).is_err());
    }

    #[test]
    fn test_factory_creates_matching_backend() {
        for strategy in [
            HistoryStrategy::web(),
            HistoryStrategy::hash().with_base("/app"),
            HistoryStrategy::memory(),
        ] {
            let backend = strategy.create(DEFAULT_CAPACITY);
            assert_eq!(backend.mode(), strategy.mode());
            assert_eq!(backend.location(), "/");
            assert_eq!(backend.entries().len(), 1);
        }
    }

    #[test]
    fn test_default_is_web_at_root() {
        let strategy = HistoryStrategy::default();
        assert_eq!(strategy.mode(), HistoryMode::Web);
        assert_eq!(strategy.base(), "/");
    }
}
