// src/progress.rs
/// Lightweight progress reporting for blocking work (sheet sync).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called before a fetch starts.
    fn begin(&mut self, _what: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when the fetch ends, successful or not.
    fn finish(&mut self, _ok: bool) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
