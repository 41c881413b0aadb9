use async_trait::async_trait;
use thiserror::Error;
use tikscout_shared_models::{CandidateUser, VideoStat};
use tikscout_tiktok::{ApiError, TikTokClient};

/// Why a call to the source produced no records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchFailure {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected response shape: missing {0}")]
    Shape(String),
}

impl From<ApiError> for FetchFailure {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Shape(path) => FetchFailure::Shape(path.to_string()),
            other => FetchFailure::Transport(other.to_string()),
        }
    }
}

#[async_trait]
pub trait CreatorSource: Send + Sync {
    async fn search_users(
        &self,
        keyword: &str,
        count: u32,
        offset: u32,
    ) -> Result<Vec<CandidateUser>, FetchFailure>;

    async fn user_videos(&self, sec_uid: &str, count: u32) -> Result<Vec<VideoStat>, FetchFailure>;
}

#[async_trait]
impl CreatorSource for TikTokClient {
    async fn search_users(
        &self,
        keyword: &str,
        count: u32,
        offset: u32,
    ) -> Result<Vec<CandidateUser>, FetchFailure> {
        let entries = TikTokClient::search_users(self, keyword, count, offset).await?;

        Ok(entries
            .into_iter()
            .map(|entry| CandidateUser::from(entry.user))
            .collect())
    }

    async fn user_videos(&self, sec_uid: &str, count: u32) -> Result<Vec<VideoStat>, FetchFailure> {
        let items = TikTokClient::get_user_videos(self, sec_uid, count, 0).await?;

        Ok(items
            .into_iter()
            .map(|item| VideoStat {
                play_count: item.stats.play_count,
            })
            .collect())
    }
}
