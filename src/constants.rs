// Creator Lens Constants
// Shared scoring defaults. Weight defaults live in weights.rs; timeframe
// preset tables live in timeframes.rs.

// Scoring formula version (bump when the formula changes so downstream
// consumers can invalidate cached score displays)
pub const SCORING_VERSION: u32 = 1;

// Short/long classification boundary. 60 seconds inclusive is a short.
pub const SHORT_MAX_SECONDS: u64 = 60;

// Floor for days-since-publish. Prevents division blow-up for videos
// published within the last ~15 minutes.
pub const MIN_DAYS_SINCE_PUBLISH: f64 = 0.01;

// Weight groups must sum to 1.0 within this absolute tolerance
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

// Score output range
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

// Paths
pub const CREATORLENS_FOLDER: &str = ".creatorlens";
pub const APP_DB_FILENAME: &str = "creatorlens.db";
