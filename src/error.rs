// src/error.rs
use std::path::PathBuf;

/// Anything that stops a dataset from reaching the matcher.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {code} from {url}")]
    Status { code: u16, url: String },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sheet is empty (no header row)")]
    Empty,

    #[error("required column `{0}` not found in sheet header")]
    MissingColumn(&'static str),
}
