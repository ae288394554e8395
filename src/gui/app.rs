// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{consts::APP_TITLE, state::AppState},
    loader::{self, SheetCache, Source},
    matcher::{self, Matches},
    record::Dataset,
};

use super::progress::GuiProgress;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    crate::log::enable();
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    source: Box<dyn Source>,
    cache: SheetCache,

    /// Snapshot the current matches were computed against
    pub dataset: Option<Arc<Dataset>>,
    /// Grouped matches for `state.gui.last_query` (None = idle)
    pub matches: Option<Matches>,
    /// Cause of the last failed sync, shown under the failure notice
    pub load_error: Option<String>,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let source = loader::source_for(&state.options.source);
        let cache = SheetCache::new(state.options.source.ttl);
        logf!("Init: source={} ttl={:?}", source.describe(), cache.ttl());

        let mut app = Self {
            state,
            source,
            cache,
            dataset: None,
            matches: None,
            load_error: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
        };
        app.sync();
        app
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Make sure the dataset is no older than the TTL.
    pub fn sync(&mut self) {
        let mut prog = GuiProgress::new(self.status.clone());
        match self.cache.get(self.source.as_ref(), &mut prog) {
            Ok(ds) => {
                if self.dataset.as_ref().is_none_or(|old| !Arc::ptr_eq(old, &ds)) {
                    logd!("UI: dataset replaced ({} records)", ds.len());
                }
                self.dataset = Some(ds);
                self.load_error = None;
            }
            Err(e) => {
                // Stale data must not be searched after a failed sync.
                self.dataset = None;
                self.matches = None;
                self.load_error = Some(e.to_string());
            }
        }
    }

    /// Force a refetch regardless of age.
    pub fn refresh(&mut self) {
        logf!("UI: Refresh");
        self.cache.invalidate();
        self.sync();
        self.rematch();
    }

    /// Commit the search box text as the active query.
    pub fn submit(&mut self) {
        let q = self.state.gui.query.clone();
        logf!("UI: Query {:?}", q);
        self.state.gui.last_query = q;

        if self.state.gui.last_query.trim().is_empty() {
            self.matches = None;
            return;
        }
        self.sync();
        self.rematch();
    }

    /// Recompute matches for the committed query against the current snapshot.
    fn rematch(&mut self) {
        self.matches = match &self.dataset {
            Some(ds) => matcher::find(&self.state.gui.last_query, ds),
            None => None,
        };
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::search_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::results::draw(ui, self);
        });
    }
}
