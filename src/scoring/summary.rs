// Batch summary aggregates

use serde::Serialize;

use super::ScoredVideo;
use crate::metrics::VideoType;

/// Aggregate view over one scored batch.
/// Empty batches yield zeroed aggregates and no top videos.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub count: usize,
    pub avg_viral_score: f64,
    pub avg_performance_score: f64,
    pub top_viral_video: Option<ScoredVideo>,
    pub top_performance_video: Option<ScoredVideo>,
    pub shorts_count: usize,
    pub long_form_count: usize,
}

/// Summarize a scored batch. Never panics; the empty batch is the zero
/// summary. On tied top scores the first video in batch order wins.
pub fn summary_stats(videos: &[ScoredVideo]) -> SummaryStats {
    if videos.is_empty() {
        return SummaryStats {
            count: 0,
            avg_viral_score: 0.0,
            avg_performance_score: 0.0,
            top_viral_video: None,
            top_performance_video: None,
            shorts_count: 0,
            long_form_count: 0,
        };
    }

    let count = videos.len();
    let avg_viral_score = videos.iter().map(|v| v.viral_score).sum::<f64>() / count as f64;
    let avg_performance_score =
        videos.iter().map(|v| v.performance_score).sum::<f64>() / count as f64;

    let mut top_viral = &videos[0];
    let mut top_performance = &videos[0];
    for v in &videos[1..] {
        if v.viral_score > top_viral.viral_score {
            top_viral = v;
        }
        if v.performance_score > top_performance.performance_score {
            top_performance = v;
        }
    }

    let shorts_count = videos
        .iter()
        .filter(|v| v.video_type == VideoType::Short)
        .count();

    SummaryStats {
        count,
        avg_viral_score,
        avg_performance_score,
        top_viral_video: Some(top_viral.clone()),
        top_performance_video: Some(top_performance.clone()),
        shorts_count,
        long_form_count: count - shorts_count,
    }
}
