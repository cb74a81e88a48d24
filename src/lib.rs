// Creator Lens - Scoring Engine Library
// Turns raw per-video engagement counters into batch-relative Viral and
// Performance scores.

pub mod constants;
pub mod db;
pub mod error;
pub mod metrics;
pub mod scoring;
pub mod timeframes;
pub mod video;
pub mod weights;

pub use error::{CreatorLensError, Result};
pub use scoring::{process_batch, ScoredVideo};
pub use video::VideoRecord;
pub use weights::ScoreWeights;
