// Video records as supplied by the upstream platform client

use serde::{Deserialize, Serialize};

/// One video as reported by the ingestion layer.
/// Counts are non-negative; `published_at` is an ISO-8601 timestamp and
/// `duration` an ISO-8601 duration (e.g. "PT1M13S"). Both are kept as the
/// raw strings the platform API returns and parsed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub channel_id: String,
    pub channel_title: String,
    pub published_at: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
