use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_HOMEPAGE: &str = "https://github.com/mifi/lossless-cut";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub homepage_url: String,
    /// Locale file name under `locales/`, e.g. `fr` for `locales/fr.toml`.
    pub language: Option<String>,
    pub ui: UiConfig,
    pub runner: RunnerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub transition_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub ffmpeg_path: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            homepage_url: DEFAULT_HOMEPAGE.to_string(),
            language: None,
            ui: UiConfig::default(),
            runner: RunnerConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { transition_ms: 200 }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
            timeout_seconds: 300,
        }
    }
}

impl UiConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

impl RunnerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::info!("Using default config ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Locale file for the configured language, relative to `config_dir`.
    pub fn locale_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.language
            .as_deref()
            .filter(|lang| !lang.is_empty())
            .map(|lang| config_dir.join("locales").join(format!("{lang}.toml")))
    }
}
