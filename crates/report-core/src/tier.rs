use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Coarse classification used to pick a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Poor,
    Fair,
    Good,
}

/// Two breakpoints splitting [0, 1] into three tiers.
/// A value equal to a breakpoint belongs to the lower tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub fair: f64,
    pub good: f64,
}

impl TierThresholds {
    pub const SCORE: TierThresholds = TierThresholds {
        fair: 0.75,
        good: 0.90,
    };

    pub const EARNINGS: TierThresholds = TierThresholds {
        fair: 0.50,
        good: 0.75,
    };

    pub fn classify(&self, score: f64) -> Tier {
        // NaN never compares greater, so it lands in Poor.
        let above = |breakpoint: f64| score.partial_cmp(&breakpoint) == Some(Ordering::Greater);
        if !above(self.fair) {
            Tier::Poor
        } else if !above(self.good) {
            Tier::Fair
        } else {
            Tier::Good
        }
    }

    pub fn validate(&self, name: &'static str) -> Result<(), ReportError> {
        if !self.fair.is_finite() || !self.good.is_finite() || self.fair > self.good {
            return Err(ReportError::InvalidThresholds {
                name,
                fair: self.fair,
                good: self.good,
            });
        }
        Ok(())
    }
}

pub fn derive_score_tier(score: f64) -> Tier {
    TierThresholds::SCORE.classify(score)
}

pub fn derive_earnings_tier(score: f64) -> Tier {
    TierThresholds::EARNINGS.classify(score)
}
