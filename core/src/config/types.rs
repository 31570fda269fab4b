//! Minimal configuration types for quiz-nav core
//!
//! Core only accepts fully resolved, validated configuration.
//! All discovery, loading, and merging happens in CLI layer.

use crate::history::{HistoryStrategy, DEFAULT_CAPACITY};
use crate::location::MatchOptions;
use crate::router::RouterBuilder;
use serde::{Deserialize, Serialize};

fn default_max_history() -> usize {
    DEFAULT_CAPACITY
}

/// Fully resolved router settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterSettings {
    /// History strategy and base path
    #[serde(default)]
    pub history: HistoryStrategy,
    /// Treat a trailing slash as significant
    #[serde(default)]
    pub strict: bool,
    /// Compare paths case-sensitively
    #[serde(default)]
    pub sensitive: bool,
    /// Maximum number of history entries
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

impl RouterSettings {
    pub fn new(history: HistoryStrategy) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions::default()
            .strict(self.strict)
            .sensitive(self.sensitive)
    }

    /// Apply these settings to a router builder
    pub fn apply(&self, builder: RouterBuilder) -> RouterBuilder {
        builder
            .history(self.history.clone())
            .options(self.match_options())
            .max_history(self.max_history)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if self.max_history == 0 {
            return Err("max_history must be at least 1".to_string());
        }

        let base = self.history.base();
        if base.contains(['?', '#']) {
            return Err(format!("History base '{}' must be a plain path", base));
        }

        Ok(())
    }
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            history: HistoryStrategy::default(),
            strict: false,
            sensitive: false,
            max_history: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryMode;
    use crate::quiz::quiz_routes;

    #[test]
    fn test_defaults_from_empty_json() {
        let settings: RouterSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, RouterSettings::default());
        assert_eq!(settings.history.mode(), HistoryMode::Web);
        assert_eq!(settings.max_history, DEFAULT_CAPACITY);
        assert_eq!(settings.match_options(), MatchOptions::default());
    }

    #[test]
    fn test_apply_to_builder() {
        let settings: RouterSettings = serde_json::from_str(
            r#"{"history": {"mode": "hash", "base": "/quiz"}, "strict": true, "max_history": 5}"#,
        )
        .unwrap();
        assert!(settings.validate().is_ok());

        let router = settings
            .apply(RouterBuilder::new().routes(quiz_routes()))
            .build()
            .unwrap();
        assert_eq!(router.history().mode(), HistoryMode::Hash);
        assert_eq!(router.href("Login").unwrap(), "/quiz/#/login");
        assert!(router.options().strict);
        assert!(!router.options().sensitive);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = RouterSettings::default();
        settings.max_history = 0;
        assert!(settings.validate().is_err());

        let settings = RouterSettings::new(HistoryStrategy::web().with_base("/quiz?x=1"));
        assert!(settings.validate().is_err());
    }
}
