use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_urls: usize,
    pub timestamp: i64,
}

impl StatsResponse {
    pub fn new(total_urls: usize) -> Self {
        Self {
            total_urls,
            timestamp: super::now_millis(),
        }
    }
}
