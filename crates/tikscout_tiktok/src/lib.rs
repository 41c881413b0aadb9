mod de;
pub mod item_list;
pub mod method;
pub mod search;
pub mod user;
pub mod user_detail;

use std::time::Duration;

use reqwest::header::{ACCEPT, COOKIE, HeaderMap, HeaderValue, REFERER, USER_AGENT};
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use item_list::{ItemList, ItemListParams, VideoItem};
use search::{SearchUser, SearchUserEntry, SearchUserParams};
use user_detail::{UserDetail, UserDetailParams, UserInfo};

pub const BASE_URL: &str = "https://www.tiktok.com/api";
pub const DEFAULT_PAGE_SIZE: u32 = 30;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/103.0.0.0 Safari/537.36";
const REFERER_URL: &str = "https://www.tiktok.com/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response shape: missing `{0}`")]
    Shape(&'static str),
    #[error("session token is not a valid header value: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
}

pub struct TikTokClient {
    base_url: String,
    reqwest: Client,
}

impl TikTokClient {
    pub fn new(ms_token: Option<&str>) -> Result<Self, ApiError> {
        Self::with_base_url(BASE_URL, ms_token)
    }

    pub fn with_base_url(base_url: impl Into<String>, ms_token: Option<&str>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(REFERER, HeaderValue::from_static(REFERER_URL));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = ms_token.filter(|t| !t.is_empty()) {
            headers.insert(COOKIE, HeaderValue::from_str(&format!("msToken={token}"))?);
        }

        let reqwest = ClientBuilder::new()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            reqwest,
        })
    }

    pub(crate) async fn get<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
    ) -> reqwest::Result<T> {
        let url = format!("{}{}", self.base_url, path);

        self.reqwest
            .get(url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }

    pub async fn call<M: method::Method>(&self, params: M::Params) -> reqwest::Result<M::Response> {
        self.get(M::PATH, &params).await
    }

    pub async fn search_users(
        &self,
        keyword: &str,
        count: u32,
        offset: u32,
    ) -> Result<Vec<SearchUserEntry>, ApiError> {
        let params = SearchUserParams::builder()
            .keyword(keyword)
            .count(count)
            .cursor(offset)
            .build();

        self.call::<SearchUser>(params)
            .await?
            .user_info
            .ok_or(ApiError::Shape("userInfo"))?
            .user_list
            .ok_or(ApiError::Shape("userInfo.user_list"))
    }

    pub async fn get_user_videos(
        &self,
        sec_uid: &str,
        count: u32,
        cursor: u32,
    ) -> Result<Vec<VideoItem>, ApiError> {
        let params = ItemListParams::builder()
            .sec_uid(sec_uid)
            .count(count)
            .cursor(cursor)
            .build();

        self.call::<ItemList>(params)
            .await?
            .item_list
            .ok_or(ApiError::Shape("itemList"))
    }

    pub async fn get_user_info(&self, username: &str) -> Result<UserDetail, ApiError> {
        let params = UserDetailParams::builder().unique_id(username).build();

        self.call::<UserInfo>(params)
            .await?
            .user_info
            .ok_or(ApiError::Shape("userInfo"))
    }
}
