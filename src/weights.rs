// Score weight configuration
// User-tunable weighting for the viral and performance formulas. The
// engine treats weights as a pure input; persistence lives in db/.

use serde::{Deserialize, Serialize};

use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::error::{CreatorLensError, Result};

/// Weights for the viral score (momentum signal)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViralWeights {
    pub velocity: f64,
    pub engagement: f64,
    pub comment: f64,
}

/// Weights for the performance score (engagement-quality signal)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceWeights {
    pub engagement: f64,
    pub comment: f64,
}

/// Full weight configuration, one per user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreWeights {
    pub viral: ViralWeights,
    pub performance: PerformanceWeights,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            viral: ViralWeights {
                velocity: 0.5,
                engagement: 0.3,
                comment: 0.2,
            },
            performance: PerformanceWeights {
                engagement: 0.6,
                comment: 0.4,
            },
        }
    }
}

impl ScoreWeights {
    /// Each weight group must sum to 1.0 within WEIGHT_SUM_TOLERANCE.
    /// This is the boundary contract for anything that persists weights;
    /// the scoring path trusts its caller and only clamps.
    pub fn validate(&self) -> Result<()> {
        let viral_sum = self.viral.velocity + self.viral.engagement + self.viral.comment;
        if (viral_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(CreatorLensError::InvalidWeights(format!(
                "viral weights sum to {:.3}, expected 1.0",
                viral_sum
            )));
        }

        let performance_sum = self.performance.engagement + self.performance.comment;
        if (performance_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(CreatorLensError::InvalidWeights(format!(
                "performance weights sum to {:.3}, expected 1.0",
                performance_sum
            )));
        }

        Ok(())
    }
}
