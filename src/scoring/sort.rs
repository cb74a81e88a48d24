// Ranking of scored videos
// Stable descending sort: ties keep their input order so repeated calls
// on the same batch produce the same ranking.

use std::cmp::Ordering;

use chrono::DateTime;

use super::ScoredVideo;

/// Sort key for ranked listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    ViralScore,
    PerformanceScore,
    ViewCount,
    PublishDate,
    CommentCount,
    LikeCount,
}

impl SortCriterion {
    /// Parse a CLI/API label. Accepts the short labels the UI uses and
    /// the camelCase field names.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "viral" | "viralScore" => Some(SortCriterion::ViralScore),
            "performance" | "performanceScore" => Some(SortCriterion::PerformanceScore),
            "views" | "viewCount" => Some(SortCriterion::ViewCount),
            "date" | "publishDate" => Some(SortCriterion::PublishDate),
            "comments" | "commentCount" => Some(SortCriterion::CommentCount),
            "likes" | "likeCount" => Some(SortCriterion::LikeCount),
            _ => None,
        }
    }
}

/// Stable descending sort by the given criterion.
/// publishDate orders newest first; unparseable dates sort last.
pub fn sort(mut videos: Vec<ScoredVideo>, criterion: SortCriterion) -> Vec<ScoredVideo> {
    videos.sort_by(|a, b| compare(b, a, criterion));
    videos
}

fn compare(a: &ScoredVideo, b: &ScoredVideo, criterion: SortCriterion) -> Ordering {
    match criterion {
        SortCriterion::ViralScore => a.viral_score.total_cmp(&b.viral_score),
        SortCriterion::PerformanceScore => a.performance_score.total_cmp(&b.performance_score),
        SortCriterion::ViewCount => a.video.view_count.cmp(&b.video.view_count),
        SortCriterion::PublishDate => publish_key(a).cmp(&publish_key(b)),
        SortCriterion::CommentCount => a.video.comment_count.cmp(&b.video.comment_count),
        SortCriterion::LikeCount => a.video.like_count.cmp(&b.video.like_count),
    }
}

/// Millisecond timestamp for date ordering; unparseable dates sort oldest
fn publish_key(v: &ScoredVideo) -> i64 {
    DateTime::parse_from_rfc3339(&v.video.published_at)
        .map(|ts| ts.timestamp_millis())
        .unwrap_or(i64::MIN)
}
