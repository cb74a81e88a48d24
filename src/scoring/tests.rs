// Scoring Engine Test Fixtures
// Deterministic record builders; the clock is pinned so velocity and
// timeframe filtering are exact.

use chrono::{DateTime, Duration, SecondsFormat, TimeZone, Utc};

use super::sort::{self, SortCriterion};
use super::summary::summary_stats;
use super::*;
use crate::metrics::VideoType;
use crate::weights::{PerformanceWeights, ScoreWeights, ViralWeights};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Build a video published `days_ago` days before the pinned clock
fn video(id: &str, duration: &str, days_ago: i64, views: u64, likes: u64, comments: u64) -> VideoRecord {
    let published = now() - Duration::days(days_ago);
    VideoRecord {
        id: id.to_string(),
        title: format!("video {}", id),
        channel_id: "chan-1".to_string(),
        channel_title: "Test Channel".to_string(),
        published_at: published.to_rfc3339_opts(SecondsFormat::Secs, true),
        view_count: views,
        like_count: likes,
        comment_count: comments,
        duration: duration.to_string(),
        tags: None,
    }
}

/// Viral weights that isolate the velocity signal
fn velocity_only() -> ScoreWeights {
    ScoreWeights {
        viral: ViralWeights {
            velocity: 1.0,
            engagement: 0.0,
            comment: 0.0,
        },
        performance: PerformanceWeights {
            engagement: 1.0,
            comment: 0.0,
        },
    }
}

// ----- Normalization -----

#[test]
fn test_normalize_linear() {
    assert_eq!(normalize(5.0, 0.0, 10.0), 0.5);
    assert_eq!(normalize(0.0, 0.0, 10.0), 0.0);
    assert_eq!(normalize(10.0, 0.0, 10.0), 1.0);
}

#[test]
fn test_normalize_degenerate_bounds_are_neutral() {
    assert_eq!(normalize(3.0, 3.0, 3.0), 0.5);
    assert_eq!(normalize(0.0, 0.0, 0.0), 0.5);
}

#[test]
fn test_normalize_clamps_out_of_bounds_values() {
    assert_eq!(normalize(-1.0, 0.0, 10.0), 0.0);
    assert_eq!(normalize(11.0, 0.0, 10.0), 1.0);
}

#[test]
fn test_compute_bounds_empty_defaults() {
    let bounds = compute_bounds(&[]);
    assert_eq!(bounds, NormalizationBounds::default());
    assert_eq!(bounds.engagement, (0.0, 1.0));
}

#[test]
fn test_compute_bounds_spans_batch() {
    let batch = [
        crate::metrics::RawMetrics {
            engagement_rate: 0.02,
            comment_rate: 0.001,
            velocity: 3.0,
        },
        crate::metrics::RawMetrics {
            engagement_rate: 0.10,
            comment_rate: 0.020,
            velocity: 8.0,
        },
    ];
    let bounds = compute_bounds(&batch);
    assert_eq!(bounds.engagement, (0.02, 0.10));
    assert_eq!(bounds.comment, (0.001, 0.020));
    assert_eq!(bounds.velocity, (3.0, 8.0));
}

// ----- Filtering -----

#[test]
fn test_filter_by_timeframe() {
    let videos = vec![
        video("recent", "PT5M", 5, 1000, 100, 10),
        video("old", "PT5M", 45, 1000, 100, 10),
    ];
    let kept = filter(&videos, None, Some(30.0), now());
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "recent");

    // No timeframe keeps everything
    let kept = filter(&videos, None, None, now());
    assert_eq!(kept.len(), 2);
}

#[test]
fn test_filter_by_type() {
    let videos = vec![
        video("short", "PT45S", 5, 1000, 100, 10),
        video("long", "PT12M", 5, 1000, 100, 10),
    ];
    let kept = filter(&videos, Some(VideoType::Short), None, now());
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "short");

    let kept = filter(&videos, Some(VideoType::Long), None, now());
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "long");
}

#[test]
fn test_filter_preserves_order() {
    let videos = vec![
        video("a", "PT45S", 1, 10, 1, 0),
        video("b", "PT30S", 2, 20, 2, 0),
        video("c", "PT15S", 3, 30, 3, 0),
    ];
    let kept = filter(&videos, Some(VideoType::Short), None, now());
    let ids: Vec<&str> = kept.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

// ----- Scoring -----

#[test]
fn test_process_batch_empty() {
    let scored = process_batch(&[], None, None, &ScoreWeights::default(), now());
    assert!(scored.is_empty());
}

#[test]
fn test_single_video_batch_is_neutral() {
    // One video: every metric's min equals its max, so everything
    // normalizes to 0.5 and both scores sit at 50
    let videos = vec![video("only", "PT5M", 10, 5000, 400, 50)];
    let scored = process_batch(&videos, None, None, &ScoreWeights::default(), now());
    assert_eq!(scored.len(), 1);
    assert!((scored[0].viral_score - 50.0).abs() < 1e-9);
    assert!((scored[0].performance_score - 50.0).abs() < 1e-9);
}

#[test]
fn test_identical_batch_is_neutral() {
    let videos = vec![
        video("a", "PT5M", 10, 5000, 400, 50),
        video("b", "PT5M", 10, 5000, 400, 50),
        video("c", "PT5M", 10, 5000, 400, 50),
    ];
    let scored = process_batch(&videos, None, None, &ScoreWeights::default(), now());
    for v in &scored {
        assert!((v.viral_score - 50.0).abs() < 1e-9);
        assert!((v.performance_score - 50.0).abs() < 1e-9);
    }
}

#[test]
fn test_scores_stay_in_range() {
    let videos = vec![
        video("dead", "PT5M", 300, 0, 0, 0),
        video("steady", "PT5M", 120, 40_000, 1_200, 300),
        video("spike", "PT30S", 1, 2_000_000, 250_000, 40_000),
        video("fresh", "PT15S", 0, 10, 0, 0),
    ];
    let configs = [
        ScoreWeights::default(),
        velocity_only(),
        ScoreWeights {
            viral: ViralWeights {
                velocity: 0.6,
                engagement: 0.25,
                comment: 0.15,
            },
            performance: PerformanceWeights {
                engagement: 0.75,
                comment: 0.25,
            },
        },
    ];

    for weights in &configs {
        weights.validate().unwrap();
        for v in process_batch(&videos, None, None, weights, now()) {
            assert!((0.0..=100.0).contains(&v.viral_score), "viral {}", v.viral_score);
            assert!(
                (0.0..=100.0).contains(&v.performance_score),
                "performance {}",
                v.performance_score
            );
        }
    }
}

#[test]
fn test_malformed_weights_still_clamp() {
    // Validation bypassed on purpose: sums well above 1.0 must clamp,
    // not crash or escape the range
    let weights = ScoreWeights {
        viral: ViralWeights {
            velocity: 2.0,
            engagement: 2.0,
            comment: 2.0,
        },
        performance: PerformanceWeights {
            engagement: 3.0,
            comment: 3.0,
        },
    };
    assert!(weights.validate().is_err());

    let videos = vec![
        video("low", "PT5M", 30, 100, 1, 0),
        video("high", "PT5M", 1, 100_000, 9_000, 2_000),
    ];
    for v in process_batch(&videos, None, None, &weights, now()) {
        assert!((0.0..=100.0).contains(&v.viral_score));
        assert!((0.0..=100.0).contains(&v.performance_score));
    }
}

#[test]
fn test_process_batch_idempotent() {
    let videos = vec![
        video("a", "PT45S", 3, 12_000, 900, 120),
        video("b", "PT8M", 20, 400_000, 15_000, 2_500),
        video("c", "PT2M", 90, 50, 2, 1),
    ];
    let weights = ScoreWeights::default();
    let first = process_batch(&videos, None, None, &weights, now());
    let second = process_batch(&videos, None, None, &weights, now());
    assert_eq!(first, second);
}

#[test]
fn test_more_views_never_lowers_velocity_rank() {
    // Raising one video's view count (same age) raises its raw velocity;
    // against unchanged neighbors its velocity-normalized score must not
    // drop
    let weights = velocity_only();
    let before = process_batch(
        &[
            video("slow", "PT5M", 10, 1_000, 10, 1),
            video("mid", "PT5M", 10, 5_000, 10, 1),
            video("fast", "PT5M", 10, 10_000, 10, 1),
        ],
        None,
        None,
        &weights,
        now(),
    );
    let after = process_batch(
        &[
            video("slow", "PT5M", 10, 1_000, 10, 1),
            video("mid", "PT5M", 10, 8_000, 10, 1),
            video("fast", "PT5M", 10, 10_000, 10, 1),
        ],
        None,
        None,
        &weights,
        now(),
    );

    let viral = |batch: &[ScoredVideo], id: &str| {
        batch.iter().find(|v| v.video.id == id).unwrap().viral_score
    };
    assert!(viral(&after, "mid") >= viral(&before, "mid"));
    // And it still ranks between its unchanged neighbors
    assert!(viral(&after, "mid") > viral(&after, "slow"));
    assert!(viral(&after, "mid") < viral(&after, "fast"));
}

#[test]
fn test_batch_output_preserves_filtered_order() {
    let videos = vec![
        video("z", "PT5M", 1, 9_000, 10, 1),
        video("a", "PT5M", 2, 1_000, 10, 1),
        video("m", "PT5M", 3, 5_000, 10, 1),
    ];
    let scored = process_batch(&videos, None, None, &ScoreWeights::default(), now());
    let ids: Vec<&str> = scored.iter().map(|v| v.video.id.as_str()).collect();
    assert_eq!(ids, ["z", "a", "m"]);
}

#[test]
fn test_zero_view_video_scores_at_floor() {
    let videos = vec![
        video("zero", "PT5M", 10, 0, 0, 0),
        video("busy", "PT5M", 10, 50_000, 4_000, 800),
    ];
    let scored = process_batch(&videos, None, None, &ScoreWeights::default(), now());
    let zero = scored.iter().find(|v| v.video.id == "zero").unwrap();
    assert_eq!(zero.engagement_rate, 0.0);
    assert_eq!(zero.comment_rate, 0.0);
    assert_eq!(zero.velocity, 0.0);
    assert!((zero.viral_score - 0.0).abs() < 1e-9);
    assert!((zero.performance_score - 0.0).abs() < 1e-9);
}

// ----- Sorting -----

#[test]
fn test_sort_descending_by_viral() {
    let videos = vec![
        video("a", "PT5M", 10, 1_000, 10, 1),
        video("b", "PT5M", 1, 500_000, 40_000, 9_000),
        video("c", "PT5M", 30, 20_000, 600, 80),
    ];
    let scored = process_batch(&videos, None, None, &ScoreWeights::default(), now());
    let ranked = sort::sort(scored, SortCriterion::ViralScore);
    for pair in ranked.windows(2) {
        assert!(pair[0].viral_score >= pair[1].viral_score);
    }
    assert_eq!(ranked[0].video.id, "b");
}

#[test]
fn test_sort_is_stable_on_ties() {
    // Identical records score identically; input order must survive
    let videos = vec![
        video("first", "PT5M", 10, 5_000, 400, 50),
        video("second", "PT5M", 10, 5_000, 400, 50),
        video("third", "PT5M", 10, 5_000, 400, 50),
    ];
    let scored = process_batch(&videos, None, None, &ScoreWeights::default(), now());
    let ranked = sort::sort(scored, SortCriterion::ViralScore);
    let ids: Vec<&str> = ranked.iter().map(|v| v.video.id.as_str()).collect();
    assert_eq!(ids, ["first", "second", "third"]);
}

#[test]
fn test_sort_by_publish_date_newest_first() {
    let videos = vec![
        video("old", "PT5M", 60, 1_000, 10, 1),
        video("new", "PT5M", 1, 1_000, 10, 1),
        video("mid", "PT5M", 30, 1_000, 10, 1),
    ];
    let scored = process_batch(&videos, None, None, &ScoreWeights::default(), now());
    let ranked = sort::sort(scored, SortCriterion::PublishDate);
    let ids: Vec<&str> = ranked.iter().map(|v| v.video.id.as_str()).collect();
    assert_eq!(ids, ["new", "mid", "old"]);
}

#[test]
fn test_sort_by_counts() {
    let videos = vec![
        video("a", "PT5M", 5, 100, 50, 9),
        video("b", "PT5M", 5, 300, 10, 3),
        video("c", "PT5M", 5, 200, 30, 6),
    ];
    let scored = process_batch(&videos, None, None, &ScoreWeights::default(), now());

    let by_views = sort::sort(scored.clone(), SortCriterion::ViewCount);
    let ids: Vec<&str> = by_views.iter().map(|v| v.video.id.as_str()).collect();
    assert_eq!(ids, ["b", "c", "a"]);

    let by_likes = sort::sort(scored, SortCriterion::LikeCount);
    let ids: Vec<&str> = by_likes.iter().map(|v| v.video.id.as_str()).collect();
    assert_eq!(ids, ["a", "c", "b"]);
}

// ----- Summary -----

#[test]
fn test_summary_stats_empty() {
    let stats = summary_stats(&[]);
    assert_eq!(stats.count, 0);
    assert_eq!(stats.avg_viral_score, 0.0);
    assert_eq!(stats.avg_performance_score, 0.0);
    assert!(stats.top_viral_video.is_none());
    assert!(stats.top_performance_video.is_none());
    assert_eq!(stats.shorts_count, 0);
    assert_eq!(stats.long_form_count, 0);
}

#[test]
fn test_summary_stats_aggregates() {
    let videos = vec![
        video("short-hot", "PT30S", 1, 900_000, 80_000, 12_000),
        video("long-steady", "PT14M", 40, 60_000, 5_000, 900),
        video("short-quiet", "PT45S", 90, 2_000, 40, 5),
    ];
    let scored = process_batch(&videos, None, None, &ScoreWeights::default(), now());
    let stats = summary_stats(&scored);

    assert_eq!(stats.count, 3);
    assert_eq!(stats.shorts_count, 2);
    assert_eq!(stats.long_form_count, 1);

    let expected_avg = scored.iter().map(|v| v.viral_score).sum::<f64>() / 3.0;
    assert!((stats.avg_viral_score - expected_avg).abs() < 1e-9);

    let top = stats.top_viral_video.unwrap();
    let best = scored
        .iter()
        .max_by(|a, b| a.viral_score.total_cmp(&b.viral_score))
        .unwrap();
    assert_eq!(top.video.id, best.video.id);
}

#[test]
fn test_summary_top_tie_takes_first() {
    let videos = vec![
        video("first", "PT5M", 10, 5_000, 400, 50),
        video("second", "PT5M", 10, 5_000, 400, 50),
    ];
    let scored = process_batch(&videos, None, None, &ScoreWeights::default(), now());
    let stats = summary_stats(&scored);
    assert_eq!(stats.top_viral_video.unwrap().video.id, "first");
    assert_eq!(stats.top_performance_video.unwrap().video.id, "first");
}
