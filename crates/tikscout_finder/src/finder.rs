use tikscout_shared_models::QualifiedInfluencer;
use tracing::info;

use crate::config::FinderConfig;
use crate::dedup::dedup_last_wins;
use crate::error::FinderError;
use crate::pacing::Pacer;
use crate::progress::{NoProgress, ProgressSink};
use crate::source::CreatorSource;
use crate::stats::RunStats;

pub struct InfluencerFinder<S, P> {
    pub(crate) source: S,
    pub(crate) pacer: P,
    pub(crate) config: FinderConfig,
    pub(crate) progress: Box<dyn ProgressSink>,
}

#[derive(Debug, Clone, Default)]
pub struct FinderReport {
    pub influencers: Vec<QualifiedInfluencer>,
    pub stats: RunStats,
}

impl<S: CreatorSource, P: Pacer> InfluencerFinder<S, P> {
    pub fn new(source: S, pacer: P, config: FinderConfig) -> Self {
        Self {
            source,
            pacer,
            config,
            progress: Box::new(NoProgress),
        }
    }

    pub fn with_progress(mut self, progress: impl ProgressSink + 'static) -> Self {
        self.progress = Box::new(progress);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Searches and qualifies every keyword in order, then keeps one entry per
    /// username. When a username qualifies under several keywords, the last one wins.
    pub async fn find<K: AsRef<str>>(&self, keywords: &[K]) -> Result<FinderReport, FinderError> {
        let mut stats = RunStats::default();
        let mut qualified: Vec<QualifiedInfluencer> = Vec::new();

        for keyword in keywords {
            let keyword = keyword.as_ref();
            info!(keyword, "searching niche");

            let candidates = self
                .search_keyword(keyword, self.config.results_per_keyword, &mut stats)
                .await?;

            let accepted = self
                .qualify_candidates(&candidates, keyword, &mut stats)
                .await?;

            info!(keyword, qualified = accepted.len(), "niche done");
            qualified.extend(accepted);
        }

        let influencers = dedup_last_wins(qualified, |inf| inf.username.clone());

        Ok(FinderReport { influencers, stats })
    }
}
