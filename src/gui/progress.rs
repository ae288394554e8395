// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::config::consts::LOAD_FAILED_MSG;
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, what: &str) {
        self.set_status(s!(what));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn finish(&mut self, ok: bool) {
        if !ok {
            self.set_status(LOAD_FAILED_MSG);
        }
    }
}
