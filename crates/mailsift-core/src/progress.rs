/// Callback channel for live progress. The pipeline invokes it synchronously
/// and assumes nothing about what the caller renders; the same lines also end
/// up in the returned run log.
pub trait ProgressSink {
    /// Called once per file before any work on it, for bar-style renderers.
    /// `index` is 1-based.
    fn file_started(&mut self, index: usize, total: usize, name: &str) {
        let _ = (index, total, name);
    }

    /// One human-readable status line.
    fn message(&mut self, text: &str);
}

/// Discards everything; for callers who only want the returned log.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn message(&mut self, _text: &str) {}
}
