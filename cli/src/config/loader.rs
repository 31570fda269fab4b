//! Simple CLI configuration loader for quiz-nav
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./quiz-nav.json or ./.quiz-nav/config.json
//! 3. XDG config: $XDG_CONFIG_HOME/quiz-nav/config.json or ~/.config/quiz-nav/config.json
//! 4. Built-in defaults (web history at `/`, the quiz route table)
//!
//! `QUIZ_NAV_HISTORY` / `QUIZ_NAV_BASE` override the file, flags override both.

use anyhow::{anyhow, Context, Result};
use quiz_nav_core::{
    quiz_routes, HistoryMode, HistoryStrategy, RouteDefinition, RouteTable, Router,
    RouterBuilder, RouterSettings,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "quiz-nav";
const HISTORY_ENV: &str = "QUIZ_NAV_HISTORY";
const BASE_ENV: &str = "QUIZ_NAV_BASE";

/// Raw configuration file format (simple single-file schema)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    /// History strategy, matching options and history size
    #[serde(flatten)]
    pub settings: RouterSettings,
    /// Route table; the quiz routes when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<RouteDefinition>>,
}

/// Where the configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Configuration ready to build a router from
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub settings: RouterSettings,
    pub routes: Vec<RouteDefinition>,
    pub source: ConfigSource,
}

impl ResolvedConfig {
    /// Router builder carrying these settings and routes
    pub fn builder(&self) -> RouterBuilder {
        self.settings
            .apply(RouterBuilder::new())
            .routes(self.routes.iter().cloned())
    }

    pub fn build_router(&self) -> Result<Router> {
        self.builder()
            .build()
            .with_context(|| format!("Failed to build router from {}", self.source))
    }

    pub fn table(&self) -> RouteTable {
        RouteTable::new(self.routes.clone())
    }
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    history_override: Option<HistoryMode>,
    base_override: Option<String>,
    /// Directory searched for project-local config
    working_dir: Option<PathBuf>,
    /// Directory searched for user config
    config_home: Option<PathBuf>,
    /// Captured `QUIZ_NAV_*` environment
    env: HashMap<String, String>,
}

impl CliConfigLoader {
    /// Create a new loader, capturing the process environment
    pub fn new() -> Self {
        let env = std::env::vars()
            .filter(|(key, _)| key.starts_with("QUIZ_NAV_"))
            .collect();

        Self {
            config_override: None,
            history_override: None,
            base_override: None,
            working_dir: None,
            config_home: None,
            env,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set history mode override
    pub fn with_history_override(mut self, mode: HistoryMode) -> Self {
        self.history_override = Some(mode);
        self
    }

    /// Set history base override
    pub fn with_base_override(mut self, base: String) -> Self {
        self.base_override = Some(base);
        self
    }

    /// Search `dir` instead of the current directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Search `dir` instead of the XDG config directory
    pub fn with_config_home(mut self, dir: PathBuf) -> Self {
        self.config_home = Some(dir);
        self
    }

    /// Set or replace a `QUIZ_NAV_*` variable seen by the loader
    pub fn with_env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Ignore the process environment
    pub fn without_env(mut self) -> Self {
        self.env.clear();
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<ResolvedConfig> {
        // Step 1: Find and load base configuration
        let (mut config, source) = if let Some(override_path) = &self.config_override {
            let (config, path) = self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?;
            (config, ConfigSource::File(path))
        } else {
            self.search_and_load().await?
        };
        debug!(source = %source, "Loaded configuration");

        // Step 2: Apply environment overrides
        if let Some(mode) = self.env.get(HISTORY_ENV) {
            let mode: HistoryMode = mode
                .parse()
                .map_err(|e: String| anyhow!(e))
                .with_context(|| format!("Invalid {}", HISTORY_ENV))?;
            config.settings.history =
                HistoryStrategy::from_mode(mode, config.settings.history.base());
        }
        if let Some(base) = self.env.get(BASE_ENV) {
            config.settings.history = config.settings.history.clone().with_base(base.clone());
        }

        // Step 3: Apply flag overrides
        if let Some(mode) = self.history_override {
            config.settings.history =
                HistoryStrategy::from_mode(mode, config.settings.history.base());
        }
        if let Some(base) = &self.base_override {
            config.settings.history = config.settings.history.clone().with_base(base.clone());
        }

        // Step 4: Resolve to final config
        self.resolve_config(config, source)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<(RawConfig, ConfigSource)> {
        // 1. Current working directory
        if let Some(found) = self.try_load_cwd().await? {
            return Ok(found);
        }

        // 2. XDG config directory
        if let Some(found) = self.try_load_xdg().await? {
            return Ok(found);
        }

        // 3. Built-in defaults
        Ok((RawConfig::default(), ConfigSource::Defaults))
    }

    /// Try loading from the working directory
    async fn try_load_cwd(&self) -> Result<Option<(RawConfig, ConfigSource)>> {
        let cwd = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        for candidate in [
            cwd.join("quiz-nav.json"),
            cwd.join(".quiz-nav").join("config.json"),
        ] {
            if candidate.is_file() {
                let config = self.load_file(&candidate).await?;
                return Ok(Some((config, ConfigSource::File(candidate))));
            }
        }

        Ok(None)
    }

    /// Try loading from XDG config directory
    async fn try_load_xdg(&self) -> Result<Option<(RawConfig, ConfigSource)>> {
        if let Some(config_dir) = self.get_xdg_config_dir() {
            let config_path = config_dir.join(APP_DIR).join("config.json");
            if config_path.is_file() {
                let config = self.load_file(&config_path).await?;
                return Ok(Some((config, ConfigSource::File(config_path))));
            }
        }
        Ok(None)
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<(RawConfig, PathBuf)> {
        if path.is_file() {
            Ok((self.load_file(path).await?, path.to_path_buf()))
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join("config.json");
            if config_file.exists() {
                Ok((self.load_file(&config_file).await?, config_file))
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get XDG config directory
    fn get_xdg_config_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.config_home {
            Some(dir.clone())
        } else if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            Some(PathBuf::from(xdg_config))
        } else {
            dirs::config_dir()
        }
    }

    /// Resolve raw config to ResolvedConfig
    fn resolve_config(&self, config: RawConfig, source: ConfigSource) -> Result<ResolvedConfig> {
        config
            .settings
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        let routes = config.routes.unwrap_or_else(quiz_routes);
        if routes.is_empty() {
            return Err(anyhow!("No routes configured in {}", source));
        }

        Ok(ResolvedConfig {
            settings: config.settings,
            routes,
            source,
        })
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
