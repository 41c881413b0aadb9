use tikscout_shared_models::CandidateUser;
use tracing::{debug, info};

use crate::dedup::dedup_last_wins;
use crate::error::{FinderError, Operation};
use crate::finder::InfluencerFinder;
use crate::pacing::Pacer;
use crate::progress::Stage;
use crate::source::CreatorSource;
use crate::stats::RunStats;

impl<S: CreatorSource, P: Pacer> InfluencerFinder<S, P> {
    /// Pages through search results for `keyword` until `max_results` records
    /// are collected or a page comes back empty, then dedupes by secUid.
    pub async fn search_keyword(
        &self,
        keyword: &str,
        max_results: usize,
        stats: &mut RunStats,
    ) -> Result<Vec<CandidateUser>, FinderError> {
        let policy = self.config.failure_policy;
        let mut collected: Vec<CandidateUser> = Vec::new();
        let mut offset: u32 = 0;

        self.progress
            .start(Stage::Search { keyword }, max_results as u64);

        while collected.len() < max_results {
            stats.search_calls += 1;
            let result = self
                .source
                .search_users(keyword, self.config.page_size, offset)
                .await;
            let page = match policy.absorb(result, Operation::Search, keyword, stats) {
                Ok(page) => page,
                Err(err) => {
                    self.progress.finish();
                    return Err(err);
                }
            };

            if page.is_empty() {
                debug!(keyword, offset, "no more results");
                break;
            }

            // Partial pages are common, so advance by what actually came back.
            offset = offset.saturating_add(u32::try_from(page.len()).unwrap_or(u32::MAX));
            let remaining = max_results - collected.len();
            self.progress.advance(page.len().min(remaining) as u64);
            collected.extend(page);

            self.pacer.pause().await;
        }

        self.progress.finish();
        collected.truncate(max_results);
        let unique = dedup_last_wins(collected, |user| user.sec_uid.clone());

        info!(keyword, unique = unique.len(), "found unique accounts");
        Ok(unique)
    }
}
