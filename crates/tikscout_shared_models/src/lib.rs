use serde::{Deserialize, Serialize};

pub const PROFILE_BASE_URL: &str = "https://www.tiktok.com/@";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateUser {
    pub sec_uid: String,
    pub username: String,
    pub nickname: String,
    pub follower_count: u64,
    pub following_count: u64,
    pub video_count: u64,
    pub verified: bool,
    pub bio: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VideoStat {
    pub play_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualifiedInfluencer {
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub follower_count: u64,
    pub following_count: u64,
    pub video_count: u64,
    pub avg_views: f64,
    pub verified: bool,
    pub sec_uid: String,
    pub niche: String,
    pub profile_url: String,
}

impl QualifiedInfluencer {
    pub fn from_candidate(user: &CandidateUser, avg_views: f64, niche: &str) -> Self {
        Self {
            username: user.username.clone(),
            display_name: user.nickname.clone(),
            bio: user.bio.clone(),
            follower_count: user.follower_count,
            following_count: user.following_count,
            video_count: user.video_count,
            avg_views,
            verified: user.verified,
            sec_uid: user.sec_uid.clone(),
            niche: niche.to_string(),
            profile_url: format!("{PROFILE_BASE_URL}{}", user.username),
        }
    }
}
