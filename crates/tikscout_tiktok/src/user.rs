use serde::{Deserialize, Serialize};
use tikscout_shared_models::CandidateUser;

use crate::de;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TikTokUser {
    #[serde(rename = "uniqueId")]
    pub unique_id: String,
    #[serde(rename = "secUid")]
    pub sec_uid: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub signature: String,
    #[serde(rename = "followerCount", default, deserialize_with = "de::count")]
    pub follower_count: u64,
    #[serde(rename = "followingCount", default, deserialize_with = "de::count")]
    pub following_count: u64,
    #[serde(rename = "videoCount", default, deserialize_with = "de::count")]
    pub video_count: u64,
    #[serde(default)]
    pub verified: bool,
}

impl From<TikTokUser> for CandidateUser {
    fn from(user: TikTokUser) -> Self {
        Self {
            sec_uid: user.sec_uid,
            username: user.unique_id,
            nickname: user.nickname,
            follower_count: user.follower_count,
            following_count: user.following_count,
            video_count: user.video_count,
            verified: user.verified,
            bio: user.signature,
        }
    }
}
