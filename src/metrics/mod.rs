// Metric extraction
// Converts one raw video record into primitive, non-normalized signals.
// Every function here is total: no panics, no NaN/Infinity in the output.

pub mod duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MIN_DAYS_SINCE_PUBLISH, SHORT_MAX_SECONDS};
use crate::video::VideoRecord;

/// Duration-based classification. 60 seconds inclusive is a short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoType {
    Short,
    Long,
}

/// Primitive per-video signals, before batch normalization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawMetrics {
    pub engagement_rate: f64,
    pub comment_rate: f64,
    pub velocity: f64,
}

/// Classify a video by duration.
/// Malformed durations parse as 0 seconds and land in the short bucket;
/// the fallback is logged so bad upstream data stays visible.
pub fn classify(video: &VideoRecord) -> VideoType {
    let seconds = duration::parse_duration_seconds(&video.duration).unwrap_or_else(|| {
        log::debug!(
            "unparseable duration {:?} for video {}, treating as 0s",
            video.duration,
            video.id
        );
        0
    });

    if seconds <= SHORT_MAX_SECONDS {
        VideoType::Short
    } else {
        VideoType::Long
    }
}

/// Elapsed days between publish and `now`, floored at 0.01 so velocity
/// never divides by zero. Never negative, even for future-dated records.
/// Unparseable timestamps count as just published.
pub fn days_since_publish(published_at: &str, now: DateTime<Utc>) -> f64 {
    let published = match DateTime::parse_from_rfc3339(published_at) {
        Ok(ts) => ts.with_timezone(&Utc),
        Err(_) => {
            log::debug!("unparseable publish timestamp {:?}", published_at);
            return MIN_DAYS_SINCE_PUBLISH;
        }
    };

    let days = (now - published).num_milliseconds() as f64 / 86_400_000.0;
    days.max(MIN_DAYS_SINCE_PUBLISH)
}

/// Extract the raw signals for one video.
/// Zero-view videos yield zero rates and zero velocity (ln(0/d + 1) = 0)
/// rather than dividing by zero.
pub fn raw_metrics(video: &VideoRecord, now: DateTime<Utc>) -> RawMetrics {
    let views = video.view_count as f64;

    let (engagement_rate, comment_rate) = if video.view_count == 0 {
        (0.0, 0.0)
    } else {
        (
            (video.like_count + video.comment_count) as f64 / views,
            video.comment_count as f64 / views,
        )
    };

    let days = days_since_publish(&video.published_at, now);
    let velocity = (views / days + 1.0).ln();

    RawMetrics {
        engagement_rate,
        comment_rate,
        velocity,
    }
}
