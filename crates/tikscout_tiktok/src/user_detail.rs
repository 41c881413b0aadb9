use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::de;
use crate::method::{AppParams, Method};
use crate::user::TikTokUser;

#[derive(Serialize, Debug, Builder)]
#[builder(on(String, into))]
pub struct UserDetailParams {
    #[serde(flatten)]
    #[builder(default)]
    pub app: AppParams,
    #[serde(rename = "uniqueId")]
    pub unique_id: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserDetailResponse {
    #[serde(rename = "userInfo")]
    pub user_info: Option<UserDetail>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserDetail {
    pub user: TikTokUser,
    #[serde(default)]
    pub stats: Option<UserStats>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UserStats {
    #[serde(rename = "followerCount", default, deserialize_with = "de::count")]
    pub follower_count: u64,
    #[serde(rename = "followingCount", default, deserialize_with = "de::count")]
    pub following_count: u64,
    #[serde(rename = "heartCount", default, deserialize_with = "de::count")]
    pub heart_count: u64,
    #[serde(rename = "videoCount", default, deserialize_with = "de::count")]
    pub video_count: u64,
}

pub struct UserInfo;

impl Method for UserInfo {
    const PATH: &'static str = "/user/detail/";

    type Response = UserDetailResponse;
    type Params = UserDetailParams;
}
