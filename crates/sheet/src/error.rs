use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("Failed to read locale file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid locale file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type LocaleResult<T> = Result<T, LocaleError>;
