use crate::error::ReportError;
use serde::{Deserialize, Deserializer, Serialize};

/// Result of one validation session (short or long).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionResult {
    /// Normalized to [0, 1]. May be NaN when the session had no flips.
    #[serde(deserialize_with = "nan_if_null")]
    pub score: f64,
    pub correct_answers: u32,
    pub total_flips: u32,
}

/// Earned and missed amounts for one reward category, in iDNA.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardPair {
    #[serde(deserialize_with = "zero_if_null")]
    pub earned: f64,
    #[serde(deserialize_with = "zero_if_null")]
    pub missed: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rewards {
    pub validation: RewardPair,
    pub invitation: RewardPair,
    pub flip: RewardPair,
    pub flip_report: RewardPair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RewardCategory {
    Validation,
    Flips,
    Invitations,
    FlipReports,
}

impl RewardCategory {
    /// Report table order.
    pub const ALL: [RewardCategory; 4] = [
        RewardCategory::Validation,
        RewardCategory::Flips,
        RewardCategory::Invitations,
        RewardCategory::FlipReports,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RewardCategory::Validation => "validation",
            RewardCategory::Flips => "flips",
            RewardCategory::Invitations => "invitations",
            RewardCategory::FlipReports => "flip_reports",
        }
    }
}

impl Rewards {
    pub fn get(&self, category: RewardCategory) -> RewardPair {
        match category {
            RewardCategory::Validation => self.validation,
            RewardCategory::Flips => self.flip,
            RewardCategory::Invitations => self.invitation,
            RewardCategory::FlipReports => self.flip_report,
        }
    }

    /// Exact sum of the four missed amounts, no intermediate rounding.
    pub fn total_missed(&self) -> f64 {
        self.validation.missed + self.invitation.missed + self.flip.missed + self.flip_report.missed
    }
}

/// Raw per-epoch record supplied by the data-fetching layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationOutcome {
    pub is_validated: bool,
    pub short_session: SessionResult,
    pub long_session: SessionResult,
    #[serde(deserialize_with = "nan_if_null")]
    pub total_score: f64,
    #[serde(deserialize_with = "zero_if_null")]
    pub earnings: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub earnings_score: f64,
    pub rewards: Rewards,
    pub validation_penalty: bool,
    pub did_miss_validation: bool,
    pub identity_address: String,
}

impl ValidationOutcome {
    pub fn from_json_str(raw: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(raw)?)
    }
}

// serde_json writes non-finite floats as `null`; read them back as NaN.
pub(crate) fn nan_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

pub(crate) fn zero_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}
