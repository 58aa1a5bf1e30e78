use crate::advice::AdviceSource;
use crate::error::ReportError;
use crate::tier::TierThresholds;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeriverConfig {
    pub score_tiers: TierThresholds,
    pub earnings_tiers: TierThresholds,
    pub advice_source: AdviceSource,
}

impl Default for DeriverConfig {
    fn default() -> Self {
        Self {
            score_tiers: TierThresholds::SCORE,
            earnings_tiers: TierThresholds::EARNINGS,
            advice_source: AdviceSource::default(),
        }
    }
}

impl DeriverConfig {
    /// Parses and validates a JSON config. Absent fields keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ReportError> {
        let config: DeriverConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        self.score_tiers.validate("score")?;
        self.earnings_tiers.validate("earnings")
    }
}
