use serde::Serialize;

pub trait Method {
    const PATH: &'static str;

    type Response: serde::de::DeserializeOwned;
    type Params: Serialize;
}

/// Query parameters every web endpoint expects alongside its own.
#[derive(Serialize, Debug, Clone)]
pub struct AppParams {
    pub aid: String,
    pub app_name: String,
    pub device_platform: String,
}

impl Default for AppParams {
    fn default() -> Self {
        Self {
            aid: "1988".to_string(),
            app_name: "tiktok_web".to_string(),
            device_platform: "web".to_string(),
        }
    }
}
