// In-memory stand-ins for the source and pacer, used by unit and integration tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tikscout_shared_models::{CandidateUser, VideoStat};

use crate::pacing::Pacer;
use crate::progress::{ProgressSink, Stage};
use crate::source::{CreatorSource, FetchFailure};

type Page = Result<Vec<CandidateUser>, FetchFailure>;

/// Scripted source. Search pages are served in registration order per keyword,
/// then empty; unregistered secUids have no videos. Every call is recorded.
#[derive(Default)]
pub struct MockSource {
    pages: HashMap<String, Vec<Page>>,
    videos: HashMap<String, Result<Vec<VideoStat>, FetchFailure>>,
    search_log: Mutex<Vec<(String, u32)>>,
    video_log: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_search(mut self, keyword: &str, pages: Vec<Vec<CandidateUser>>) -> Self {
        self.pages
            .entry(keyword.to_string())
            .or_default()
            .extend(pages.into_iter().map(Ok));
        self
    }

    pub fn on_search_failure(mut self, keyword: &str, failure: FetchFailure) -> Self {
        self.pages
            .entry(keyword.to_string())
            .or_default()
            .push(Err(failure));
        self
    }

    pub fn on_videos(mut self, sec_uid: &str, play_counts: &[u64]) -> Self {
        self.videos.insert(sec_uid.to_string(), Ok(plays(play_counts)));
        self
    }

    pub fn on_videos_failure(mut self, sec_uid: &str, failure: FetchFailure) -> Self {
        self.videos.insert(sec_uid.to_string(), Err(failure));
        self
    }

    /// `(keyword, offset)` for every search call, in order.
    pub fn search_calls(&self) -> Vec<(String, u32)> {
        self.search_log.lock().unwrap().clone()
    }

    pub fn video_calls(&self) -> Vec<String> {
        self.video_log.lock().unwrap().clone()
    }

    pub fn video_calls_for(&self, sec_uid: &str) -> usize {
        self.video_log
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.as_str() == sec_uid)
            .count()
    }
}

#[async_trait]
impl CreatorSource for MockSource {
    async fn search_users(
        &self,
        keyword: &str,
        _count: u32,
        offset: u32,
    ) -> Result<Vec<CandidateUser>, FetchFailure> {
        let served = {
            let mut log = self.search_log.lock().unwrap();
            let served = log.iter().filter(|(k, _)| k == keyword).count();
            log.push((keyword.to_string(), offset));
            served
        };

        self.pages
            .get(keyword)
            .and_then(|pages| pages.get(served))
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn user_videos(&self, sec_uid: &str, count: u32) -> Result<Vec<VideoStat>, FetchFailure> {
        self.video_log.lock().unwrap().push(sec_uid.to_string());

        match self.videos.get(sec_uid) {
            Some(Ok(videos)) => Ok(videos.iter().take(count as usize).copied().collect()),
            Some(Err(failure)) => Err(failure.clone()),
            None => Ok(Vec::new()),
        }
    }
}

#[derive(Debug, Default)]
pub struct CountingPacer {
    pauses: AtomicUsize,
}

impl CountingPacer {
    pub fn pauses(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Pacer for CountingPacer {
    async fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Start { keyword: Option<String>, total: u64 },
    Advance(u64),
    Finish,
}

/// Keeps every progress call. Clones share one log, so a clone can be handed
/// to the finder and the first one inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingProgress {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressSink for RecordingProgress {
    fn start(&self, stage: Stage<'_>, total: u64) {
        let keyword = match stage {
            Stage::Search { keyword } => Some(keyword.to_string()),
            Stage::Analyze => None,
        };
        self.events
            .lock()
            .unwrap()
            .push(ProgressEvent::Start { keyword, total });
    }

    fn advance(&self, delta: u64) {
        self.events.lock().unwrap().push(ProgressEvent::Advance(delta));
    }

    fn finish(&self) {
        self.events.lock().unwrap().push(ProgressEvent::Finish);
    }
}

/// A candidate whose secUid is `sec-{username}`.
pub fn candidate(username: &str, follower_count: u64) -> CandidateUser {
    CandidateUser {
        sec_uid: format!("sec-{username}"),
        username: username.to_string(),
        nickname: format!("{username} display"),
        follower_count,
        following_count: 10,
        video_count: 30,
        verified: false,
        bio: String::new(),
    }
}

pub fn plays(play_counts: &[u64]) -> Vec<VideoStat> {
    play_counts
        .iter()
        .map(|&play_count| VideoStat { play_count })
        .collect()
}
