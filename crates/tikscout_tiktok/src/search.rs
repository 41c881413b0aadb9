use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::method::{AppParams, Method};
use crate::user::TikTokUser;
use crate::DEFAULT_PAGE_SIZE;

#[derive(Serialize, Debug, Builder)]
#[builder(on(String, into))]
pub struct SearchUserParams {
    #[serde(flatten)]
    #[builder(default)]
    pub app: AppParams,
    pub keyword: String,
    #[builder(default = DEFAULT_PAGE_SIZE)]
    pub count: u32,
    #[builder(default)]
    pub cursor: u32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SearchUserResponse {
    #[serde(rename = "userInfo")]
    pub user_info: Option<SearchUserInfo>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SearchUserInfo {
    pub user_list: Option<Vec<SearchUserEntry>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchUserEntry {
    pub user: TikTokUser,
}

pub struct SearchUser;

impl Method for SearchUser {
    const PATH: &'static str = "/search/user/full/";

    type Response = SearchUserResponse;
    type Params = SearchUserParams;
}
