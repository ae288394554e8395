// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub source: SourceOptions,
    /// Write `.store/debug.log`
    pub log: bool,
}

/// Where the dataset comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// CSV export URL of a link-shared sheet.
    Sheet(String),
    /// Local CSV file (offline / fixtures).
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub kind: SourceKind,
    pub ttl: Duration,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            kind: SourceKind::Sheet(export_url(SHEET_ID)),
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
        }
    }
}

impl SourceOptions {
    pub fn set_sheet_id(&mut self, id: &str) {
        self.kind = SourceKind::Sheet(export_url(id.trim()));
    }

    pub fn set_url(&mut self, url: &str) {
        self.kind = SourceKind::Sheet(s!(url.trim()));
    }

    pub fn set_file(&mut self, path: impl Into<PathBuf>) {
        self.kind = SourceKind::File(path.into());
    }

    /// Human-readable description for status lines and logs.
    pub fn describe(&self) -> String {
        match &self.kind {
            SourceKind::Sheet(url) => url.clone(),
            SourceKind::File(p) => p.display().to_string(),
        }
    }
}

/// CSV export URL for a sheet id.
pub fn export_url(sheet_id: &str) -> String {
    join!(EXPORT_URL_PREFIX, sheet_id, EXPORT_URL_SUFFIX)
}
