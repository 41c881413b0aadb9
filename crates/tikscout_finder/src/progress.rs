#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage<'a> {
    /// Records collected for one keyword, out of the per-keyword cap.
    Search { keyword: &'a str },
    /// Candidates screened, out of the deduplicated candidate list.
    Analyze,
}

/// Receives progress ticks from the search and qualification loops.
/// Every method defaults to doing nothing.
pub trait ProgressSink: Send + Sync {
    fn start(&self, _stage: Stage<'_>, _total: u64) {}

    fn advance(&self, _delta: u64) {}

    fn finish(&self) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {}
