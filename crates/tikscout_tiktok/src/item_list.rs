use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::de;
use crate::method::{AppParams, Method};
use crate::DEFAULT_PAGE_SIZE;

/// `type=1` asks for the user's own posts.
pub const POSTED_VIDEOS: u8 = 1;

#[derive(Serialize, Debug, Builder)]
#[builder(on(String, into))]
pub struct ItemListParams {
    #[serde(flatten)]
    #[builder(default)]
    pub app: AppParams,
    #[builder(default = DEFAULT_PAGE_SIZE)]
    pub count: u32,
    #[builder(default)]
    pub cursor: u32,
    #[serde(rename = "secUid")]
    pub sec_uid: String,
    #[serde(rename = "type")]
    #[builder(default = POSTED_VIDEOS)]
    pub kind: u8,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ItemListResponse {
    #[serde(rename = "itemList")]
    pub item_list: Option<Vec<VideoItem>>,
    #[serde(rename = "hasMore", default)]
    pub has_more: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VideoItem {
    #[serde(default)]
    pub id: String,
    pub stats: VideoItemStats,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VideoItemStats {
    #[serde(rename = "playCount", deserialize_with = "de::count")]
    pub play_count: u64,
}

pub struct ItemList;

impl Method for ItemList {
    const PATH: &'static str = "/post/item_list/";

    type Response = ItemListResponse;
    type Params = ItemListParams;
}
