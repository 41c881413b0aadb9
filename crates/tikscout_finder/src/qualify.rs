use tikscout_shared_models::{CandidateUser, QualifiedInfluencer, VideoStat};
use tracing::{debug, info};

use crate::error::{FinderError, Operation};
use crate::finder::InfluencerFinder;
use crate::pacing::Pacer;
use crate::progress::Stage;
use crate::source::CreatorSource;
use crate::stats::RunStats;

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Qualified(QualifiedInfluencer),
    TooManyFollowers,
    NoVideos,
    LowViews(f64),
}

/// Mean play count, or `None` when there is nothing to average.
pub fn average_views(videos: &[VideoStat]) -> Option<f64> {
    if videos.is_empty() {
        return None;
    }

    let total: u128 = videos.iter().map(|v| u128::from(v.play_count)).sum();
    Some(total as f64 / videos.len() as f64)
}

impl<S: CreatorSource, P: Pacer> InfluencerFinder<S, P> {
    /// Decides one candidate. The follower ceiling is checked before any
    /// network call; the pacer only runs after a video fetch.
    pub async fn screen(
        &self,
        user: &CandidateUser,
        niche: &str,
        stats: &mut RunStats,
    ) -> Result<Verdict, FinderError> {
        let criteria = &self.config.criteria;
        stats.candidates_screened += 1;

        if user.follower_count > criteria.max_followers {
            stats.rejected_followers += 1;
            debug!(username = %user.username, followers = user.follower_count, "over follower ceiling");
            return Ok(Verdict::TooManyFollowers);
        }

        stats.video_calls += 1;
        let result = self
            .source
            .user_videos(&user.sec_uid, criteria.videos_per_user)
            .await;
        let videos = self
            .config
            .failure_policy
            .absorb(result, Operation::Videos, &user.sec_uid, stats);

        self.pacer.pause().await;

        let Some(avg_views) = average_views(&videos?) else {
            stats.rejected_no_videos += 1;
            debug!(username = %user.username, "no videos returned");
            return Ok(Verdict::NoVideos);
        };

        if avg_views < criteria.min_avg_views {
            stats.rejected_low_views += 1;
            debug!(username = %user.username, avg_views, "below view floor");
            return Ok(Verdict::LowViews(avg_views));
        }

        stats.qualified += 1;
        info!(
            username = %user.username,
            followers = user.follower_count,
            avg_views = %format!("{avg_views:.2}"),
            "qualified"
        );

        Ok(Verdict::Qualified(QualifiedInfluencer::from_candidate(
            user, avg_views, niche,
        )))
    }

    pub async fn qualify_candidates(
        &self,
        candidates: &[CandidateUser],
        niche: &str,
        stats: &mut RunStats,
    ) -> Result<Vec<QualifiedInfluencer>, FinderError> {
        let mut qualified = Vec::new();
        self.progress.start(Stage::Analyze, candidates.len() as u64);

        for user in candidates {
            let verdict = self.screen(user, niche, stats).await;
            self.progress.advance(1);

            match verdict {
                Ok(Verdict::Qualified(influencer)) => qualified.push(influencer),
                Ok(_) => {}
                Err(err) => {
                    self.progress.finish();
                    return Err(err);
                }
            }
        }

        self.progress.finish();
        Ok(qualified)
    }
}
