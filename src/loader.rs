// src/loader.rs
//! Getting the sheet into memory.
//!
//! - `Source`: where CSV text comes from (`SheetSource` over HTTPS, `FileSource` on disk).
//! - `build_dataset`: CSV text → `Dataset` (header binding, null-code rows dropped).
//! - `SheetCache`: keeps the last good `Dataset` for a bounded time.
//!
//! The cache never serves stale data after a failed refresh, and never
//! remembers a failure: the next `get` simply tries again.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::options::{SourceKind, SourceOptions};
use crate::config::consts::SYNCING_MSG;
use crate::core::{csv, net};
use crate::error::LoadError;
use crate::progress::Progress;
use crate::record::{Binding, Dataset};

pub trait Source {
    /// Raw CSV text.
    fn fetch(&self) -> Result<String, LoadError>;

    /// Short label for logs.
    fn describe(&self) -> String;
}

pub struct SheetSource {
    pub url: String,
}

impl Source for SheetSource {
    fn fetch(&self) -> Result<String, LoadError> {
        net::http_get(&self.url)
    }
    fn describe(&self) -> String { self.url.clone() }
}

pub struct FileSource {
    pub path: PathBuf,
}

impl Source for FileSource {
    fn fetch(&self) -> Result<String, LoadError> {
        fs::read_to_string(&self.path)
            .map_err(|source| LoadError::Io { path: self.path.clone(), source })
    }
    fn describe(&self) -> String { self.path.display().to_string() }
}

/// Box the source named by the options.
pub fn source_for(opts: &SourceOptions) -> Box<dyn Source> {
    match &opts.kind {
        SourceKind::Sheet(url) => Box::new(SheetSource { url: url.clone() }),
        SourceKind::File(path) => Box::new(FileSource { path: path.clone() }),
    }
}

/// Parse CSV text into a dataset. First row is the header.
pub fn build_dataset(text: &str) -> Result<Dataset, LoadError> {
    let mut rows = csv::parse_rows(text).into_iter();
    let headers = rows.next().ok_or(LoadError::Empty)?;
    let binding = Binding::from_headers(&headers)?;

    let mut dropped = 0usize;
    let records = rows
        .filter_map(|row| {
            let rec = binding.record(&row);
            if rec.is_none() { dropped += 1; }
            rec
        })
        .collect::<Vec<_>>();

    if dropped > 0 {
        logw!("Load: dropped {} row(s) without a program code", dropped);
    }

    Ok(Dataset::new(binding.columns(), records))
}

/// Fetch + parse in one go, reporting through `progress`.
pub fn load(src: &dyn Source, progress: &mut dyn Progress) -> Result<Dataset, LoadError> {
    progress.begin(SYNCING_MSG);
    let res = src.fetch().and_then(|text| build_dataset(&text));
    match &res {
        Ok(ds) => {
            logf!("Load: {} → {} records", src.describe(), ds.len());
            progress.log(&format!("Loaded {} records", ds.len()));
        }
        Err(e) => loge!("Load: {} failed: {}", src.describe(), e),
    }
    progress.finish(res.is_ok());
    res
}

/// Time-bounded holder for the current dataset.
pub struct SheetCache {
    ttl: Duration,
    entry: Option<(Instant, Arc<Dataset>)>,
}

impl SheetCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    pub fn ttl(&self) -> Duration { self.ttl }

    /// Cached dataset if still fresh, otherwise a new fetch.
    pub fn get(
        &mut self,
        src: &dyn Source,
        progress: &mut dyn Progress,
    ) -> Result<Arc<Dataset>, LoadError> {
        self.get_at(Instant::now(), src, progress)
    }

    /// `get` with an explicit clock, so expiry is testable.
    pub fn get_at(
        &mut self,
        now: Instant,
        src: &dyn Source,
        progress: &mut dyn Progress,
    ) -> Result<Arc<Dataset>, LoadError> {
        if let Some((at, ds)) = &self.entry {
            if now.saturating_duration_since(*at) < self.ttl {
                return Ok(Arc::clone(ds));
            }
        }

        self.entry = None;
        let ds = Arc::new(load(src, progress)?);
        self.entry = Some((now, Arc::clone(&ds)));
        Ok(ds)
    }

    /// Last good dataset, fresh or not. Does not fetch.
    pub fn peek(&self) -> Option<Arc<Dataset>> {
        self.entry.as_ref().map(|(_, ds)| Arc::clone(ds))
    }

    /// Force the next `get` to refetch.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
