use crate::error::{LocaleError, LocaleResult};
use crate::host::Translate;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// A flat translation table keyed by the English source text.
///
/// ```toml
/// [strings]
/// "Play/pause" = "Lecture/pause"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Locale {
    #[serde(default)]
    strings: HashMap<String, String>,
}

impl Locale {
    pub fn from_toml(content: &str) -> LocaleResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> LocaleResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LocaleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let locale = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), entries = locale.len(), "loaded locale");
        Ok(locale)
    }

    /// Loads `path`, falling back to the untranslated source text on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("{e}");
            Self::default()
        })
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Translate for Locale {
    fn translate(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
