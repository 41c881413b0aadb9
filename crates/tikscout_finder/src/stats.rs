use crate::source::FetchFailure;

/// Counters for one run, so "nothing qualified" can be told apart from "the API kept failing".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub search_calls: usize,
    pub video_calls: usize,
    pub transport_failures: usize,
    pub shape_failures: usize,
    pub candidates_screened: usize,
    pub rejected_followers: usize,
    pub rejected_no_videos: usize,
    pub rejected_low_views: usize,
    pub qualified: usize,
}

impl RunStats {
    pub fn failures(&self) -> usize {
        self.transport_failures + self.shape_failures
    }

    pub(crate) fn record_failure(&mut self, failure: &FetchFailure) {
        match failure {
            FetchFailure::Transport(_) => self.transport_failures += 1,
            FetchFailure::Shape(_) => self.shape_failures += 1,
        }
    }
}
