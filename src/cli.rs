// Creator Lens CLI binary

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};

use creator_lens::db::{self, schema};
use creator_lens::metrics::VideoType;
use creator_lens::scoring::sort::SortCriterion;
use creator_lens::scoring::summary::summary_stats;
use creator_lens::scoring::{self, ScoredVideo};
use creator_lens::timeframes;
use creator_lens::video::VideoRecord;
use creator_lens::weights::{PerformanceWeights, ScoreWeights, ViralWeights};

#[derive(Parser)]
#[command(name = "creatorlens")]
#[command(about = "Creator Lens - batch-relative video scoring", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a batch of videos and print the ranking
    Score {
        /// JSON file containing an array of video records
        videos: PathBuf,
        /// Filter by video type: short, long or all
        #[arg(long, default_value = "all")]
        video_type: String,
        /// Timeframe preset label (e.g. 7d, 30d, all)
        #[arg(long)]
        timeframe: Option<String>,
        /// Preset table the timeframe label comes from: dashboard or compare
        #[arg(long, default_value = "dashboard")]
        preset: String,
        /// Sort criterion: viral, performance, views, date, comments, likes
        #[arg(long, default_value = "viral")]
        sort: String,
        /// Maximum videos to show (0 = all)
        #[arg(long, default_value = "0")]
        limit: usize,
        /// Load this user's stored weights instead of the defaults
        #[arg(long)]
        user: Option<String>,
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print summary statistics for a batch of videos
    Summary {
        /// JSON file containing an array of video records
        videos: PathBuf,
        /// Filter by video type: short, long or all
        #[arg(long, default_value = "all")]
        video_type: String,
        /// Timeframe preset label (e.g. 7d, 30d, all)
        #[arg(long)]
        timeframe: Option<String>,
        /// Preset table the timeframe label comes from: dashboard or compare
        #[arg(long, default_value = "dashboard")]
        preset: String,
        /// Load this user's stored weights instead of the defaults
        #[arg(long)]
        user: Option<String>,
        /// Print raw JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Manage per-user score weights
    Weights {
        #[command(subcommand)]
        command: WeightsCommands,
    },
}

#[derive(Subcommand)]
enum WeightsCommands {
    /// Show a user's effective weights
    Show {
        /// User the weights belong to
        #[arg(long, default_value = "default")]
        user: String,
    },

    /// Set a user's weights (each group must sum to 1.0)
    Set {
        /// User the weights belong to
        #[arg(long, default_value = "default")]
        user: String,
        #[arg(long)]
        viral_velocity: f64,
        #[arg(long)]
        viral_engagement: f64,
        #[arg(long)]
        viral_comment: f64,
        #[arg(long)]
        performance_engagement: f64,
        #[arg(long)]
        performance_comment: f64,
    },

    /// Reset a user to the default weights
    Reset {
        /// User the weights belong to
        #[arg(long, default_value = "default")]
        user: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            videos,
            video_type,
            timeframe,
            preset,
            sort,
            limit,
            user,
            json,
        } => cmd_score(videos, video_type, timeframe, preset, sort, limit, user, json),
        Commands::Summary {
            videos,
            video_type,
            timeframe,
            preset,
            user,
            json,
        } => cmd_summary(videos, video_type, timeframe, preset, user, json),
        Commands::Weights { command } => match command {
            WeightsCommands::Show { user } => cmd_weights_show(user),
            WeightsCommands::Set {
                user,
                viral_velocity,
                viral_engagement,
                viral_comment,
                performance_engagement,
                performance_comment,
            } => cmd_weights_set(
                user,
                viral_velocity,
                viral_engagement,
                viral_comment,
                performance_engagement,
                performance_comment,
            ),
            WeightsCommands::Reset { user } => cmd_weights_reset(user),
        },
    }
}

fn cmd_score(
    videos_path: PathBuf,
    video_type: String,
    timeframe: Option<String>,
    preset: String,
    sort: String,
    limit: usize,
    user: Option<String>,
    json: bool,
) -> Result<()> {
    let videos = load_videos(&videos_path)?;
    let video_type = parse_video_type(&video_type)?;
    let timeframe_days = resolve_timeframe(&preset, timeframe.as_deref())?;
    let criterion = SortCriterion::parse(&sort)
        .ok_or_else(|| anyhow::anyhow!("Unknown sort criterion: {}", sort))?;
    let weights = load_weights(user.as_deref())?;

    let scored = scoring::process_batch(&videos, video_type, timeframe_days, &weights, Utc::now());
    let mut ranked = scoring::sort::sort(scored, criterion);
    if limit > 0 {
        ranked.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No videos matched the filters.");
        return Ok(());
    }

    println!(
        "{:>4}  {:>6}  {:>6}  {:>12}  {:>6}  {}",
        "#", "Viral", "Perf", "Views", "Type", "Title"
    );
    println!("{}", "-".repeat(72));

    for (i, v) in ranked.iter().enumerate() {
        println!(
            "{:>4}  {:>6.1}  {:>6.1}  {:>12}  {:>6}  {}",
            i + 1,
            v.viral_score,
            v.performance_score,
            v.video.view_count,
            type_label(v),
            truncate_title(&v.video.title),
        );
    }

    Ok(())
}

fn cmd_summary(
    videos_path: PathBuf,
    video_type: String,
    timeframe: Option<String>,
    preset: String,
    user: Option<String>,
    json: bool,
) -> Result<()> {
    let videos = load_videos(&videos_path)?;
    let video_type = parse_video_type(&video_type)?;
    let timeframe_days = resolve_timeframe(&preset, timeframe.as_deref())?;
    let weights = load_weights(user.as_deref())?;

    let scored = scoring::process_batch(&videos, video_type, timeframe_days, &weights, Utc::now());
    let stats = summary_stats(&scored);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Batch summary:");
    println!("  Videos:           {}", stats.count);
    println!("  Shorts:           {}", stats.shorts_count);
    println!("  Long form:        {}", stats.long_form_count);
    println!("  Avg viral:        {:.1}", stats.avg_viral_score);
    println!("  Avg performance:  {:.1}", stats.avg_performance_score);

    if let Some(top) = &stats.top_viral_video {
        println!(
            "  Top viral:        {} ({:.1})",
            truncate_title(&top.video.title),
            top.viral_score
        );
    }
    if let Some(top) = &stats.top_performance_video {
        println!(
            "  Top performance:  {} ({:.1})",
            truncate_title(&top.video.title),
            top.performance_score
        );
    }

    Ok(())
}

fn cmd_weights_show(user: String) -> Result<()> {
    let conn = db::open_app_db()?;
    let stored = schema::get_weights(&conn, &user)?;

    let (weights, source) = match stored {
        Some(w) => (w, "custom"),
        None => (ScoreWeights::default(), "default"),
    };

    println!("Weights for '{}' ({}):", user, source);
    println!("  Viral:");
    println!("    velocity:    {:.3}", weights.viral.velocity);
    println!("    engagement:  {:.3}", weights.viral.engagement);
    println!("    comment:     {:.3}", weights.viral.comment);
    println!("  Performance:");
    println!("    engagement:  {:.3}", weights.performance.engagement);
    println!("    comment:     {:.3}", weights.performance.comment);

    Ok(())
}

fn cmd_weights_set(
    user: String,
    viral_velocity: f64,
    viral_engagement: f64,
    viral_comment: f64,
    performance_engagement: f64,
    performance_comment: f64,
) -> Result<()> {
    let weights = ScoreWeights {
        viral: ViralWeights {
            velocity: viral_velocity,
            engagement: viral_engagement,
            comment: viral_comment,
        },
        performance: PerformanceWeights {
            engagement: performance_engagement,
            comment: performance_comment,
        },
    };

    let conn = db::open_app_db()?;
    schema::set_weights(&conn, &user, &weights)?;

    println!("Saved weights for '{}'", user);
    Ok(())
}

fn cmd_weights_reset(user: String) -> Result<()> {
    let conn = db::open_app_db()?;

    if schema::reset_weights(&conn, &user)? {
        println!("Reset '{}' to default weights", user);
    } else {
        println!("'{}' already uses the default weights", user);
    }

    Ok(())
}

/// Load an array of video records from a JSON file
fn load_videos(path: &Path) -> Result<Vec<VideoRecord>> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", path.display(), e))?;
    let videos: Vec<VideoRecord> = serde_json::from_str(&data)
        .map_err(|e| anyhow::anyhow!("Cannot parse {}: {}", path.display(), e))?;
    Ok(videos)
}

fn parse_video_type(label: &str) -> Result<Option<VideoType>> {
    match label {
        "all" => Ok(None),
        "short" => Ok(Some(VideoType::Short)),
        "long" => Ok(Some(VideoType::Long)),
        _ => anyhow::bail!("Unknown video type: {} (expected short, long or all)", label),
    }
}

/// Resolve a timeframe label against the chosen preset table.
/// No label means all time.
fn resolve_timeframe(preset: &str, label: Option<&str>) -> Result<Option<f64>> {
    let Some(label) = label else {
        return Ok(None);
    };

    let days = match preset {
        "dashboard" => timeframes::resolve_dashboard(label)
            .ok_or_else(|| anyhow::anyhow!("Unknown dashboard timeframe: {}", label))?,
        "compare" => Some(
            timeframes::resolve_compare(label)
                .ok_or_else(|| anyhow::anyhow!("Unknown compare timeframe: {}", label))?,
        ),
        _ => anyhow::bail!("Unknown preset table: {} (expected dashboard or compare)", preset),
    };

    Ok(days.map(f64::from))
}

/// Load a user's stored weights, falling back to the defaults
fn load_weights(user: Option<&str>) -> Result<ScoreWeights> {
    let Some(user) = user else {
        return Ok(ScoreWeights::default());
    };

    let conn = db::open_app_db()?;
    match schema::get_weights(&conn, user)? {
        Some(weights) => Ok(weights),
        None => {
            log::debug!("no stored weights for '{}', using defaults", user);
            Ok(ScoreWeights::default())
        }
    }
}

fn type_label(v: &ScoredVideo) -> &'static str {
    match v.video_type {
        VideoType::Short => "short",
        VideoType::Long => "long",
    }
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() > 32 {
        let short: String = title.chars().take(29).collect();
        format!("{}...", short)
    } else {
        title.to_string()
    }
}
