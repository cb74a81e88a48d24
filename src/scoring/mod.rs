// Scoring Engine
// Batch-relative normalization and weighted scoring of video records.
// Bounds are recomputed from scratch on every call, so scores are only
// comparable within the batch that produced them.

pub mod sort;
pub mod summary;

#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{SCORE_MAX, SCORE_MIN};
use crate::metrics::{self, RawMetrics, VideoType};
use crate::video::VideoRecord;
use crate::weights::ScoreWeights;

/// Per-batch {min, max} for each raw metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationBounds {
    pub engagement: (f64, f64),
    pub comment: (f64, f64),
    pub velocity: (f64, f64),
}

impl Default for NormalizationBounds {
    fn default() -> Self {
        // Empty batches normalize against [0, 1] so downstream math
        // stays defined
        Self {
            engagement: (0.0, 1.0),
            comment: (0.0, 1.0),
            velocity: (0.0, 1.0),
        }
    }
}

/// A video with its computed scores and signals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredVideo {
    #[serde(flatten)]
    pub video: VideoRecord,
    pub viral_score: f64,
    pub performance_score: f64,
    pub video_type: VideoType,
    pub days_since_publish: f64,
    pub engagement_rate: f64,
    pub comment_rate: f64,
    pub velocity: f64,
}

/// Keep videos matching the type and timeframe filters. Order-preserving;
/// `video_type` None means all types, `timeframe_days` None means all time.
pub fn filter<'a>(
    videos: &'a [VideoRecord],
    video_type: Option<VideoType>,
    timeframe_days: Option<f64>,
    now: DateTime<Utc>,
) -> Vec<&'a VideoRecord> {
    videos
        .iter()
        .filter(|v| {
            if let Some(days) = timeframe_days {
                if metrics::days_since_publish(&v.published_at, now) > days {
                    return false;
                }
            }
            match video_type {
                Some(t) => metrics::classify(v) == t,
                None => true,
            }
        })
        .collect()
}

/// Min and max of each raw metric across the batch.
/// Empty input falls back to the default [0, 1] bounds.
pub fn compute_bounds(batch: &[RawMetrics]) -> NormalizationBounds {
    if batch.is_empty() {
        return NormalizationBounds::default();
    }

    let mut engagement = (f64::INFINITY, f64::NEG_INFINITY);
    let mut comment = (f64::INFINITY, f64::NEG_INFINITY);
    let mut velocity = (f64::INFINITY, f64::NEG_INFINITY);

    for m in batch {
        engagement.0 = engagement.0.min(m.engagement_rate);
        engagement.1 = engagement.1.max(m.engagement_rate);
        comment.0 = comment.0.min(m.comment_rate);
        comment.1 = comment.1.max(m.comment_rate);
        velocity.0 = velocity.0.min(m.velocity);
        velocity.1 = velocity.1.max(m.velocity);
    }

    NormalizationBounds {
        engagement,
        comment,
        velocity,
    }
}

/// Linear min-max scaling into [0, 1].
/// A batch where every video shares the same raw value normalizes to 0.5
/// for all of them: neutral, so no arbitrary winner.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if (max - min).abs() < f64::EPSILON {
        return 0.5;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Weighted 0-100 scores for one video's raw metrics against the batch
/// bounds. Returns (viral, performance). The clamp keeps unvalidated
/// weight inputs from escaping the 0-100 range; validated weights already
/// land inside it.
pub fn score(
    raw: &RawMetrics,
    bounds: &NormalizationBounds,
    weights: &ScoreWeights,
) -> (f64, f64) {
    let eng = normalize(raw.engagement_rate, bounds.engagement.0, bounds.engagement.1);
    let com = normalize(raw.comment_rate, bounds.comment.0, bounds.comment.1);
    let vel = normalize(raw.velocity, bounds.velocity.0, bounds.velocity.1);

    let viral = (weights.viral.velocity * vel
        + weights.viral.engagement * eng
        + weights.viral.comment * com)
        * 100.0;
    let performance =
        (weights.performance.engagement * eng + weights.performance.comment * com) * 100.0;

    (
        viral.clamp(SCORE_MIN, SCORE_MAX),
        performance.clamp(SCORE_MIN, SCORE_MAX),
    )
}

/// Filter the batch, compute its bounds, and score every remaining video.
/// Output preserves filtered order; callers re-sort explicitly via
/// sort::sort. Empty input yields an empty output.
pub fn process_batch(
    videos: &[VideoRecord],
    video_type: Option<VideoType>,
    timeframe_days: Option<f64>,
    weights: &ScoreWeights,
    now: DateTime<Utc>,
) -> Vec<ScoredVideo> {
    let kept = filter(videos, video_type, timeframe_days, now);
    let batch: Vec<RawMetrics> = kept.iter().map(|v| metrics::raw_metrics(v, now)).collect();
    let bounds = compute_bounds(&batch);

    kept.into_iter()
        .zip(batch)
        .map(|(video, raw)| {
            let (viral_score, performance_score) = score(&raw, &bounds, weights);
            ScoredVideo {
                video: video.clone(),
                viral_score,
                performance_score,
                video_type: metrics::classify(video),
                days_since_publish: metrics::days_since_publish(&video.published_at, now),
                engagement_rate: raw.engagement_rate,
                comment_rate: raw.comment_rate,
                velocity: raw.velocity,
            }
        })
        .collect()
}
