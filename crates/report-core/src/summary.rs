use crate::advice::{advice_for, AdviceKey, CategoryAdvice};
use crate::config::DeriverConfig;
use crate::error::ReportError;
use crate::outcome::{
    nan_if_null, zero_if_null, RewardCategory, Rewards, SessionResult, ValidationOutcome,
};
use crate::tier::Tier;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Why an identity failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationFailReason {
    /// Flips were shown but answers were not submitted in time.
    LateSubmission,
    MissedValidation,
    WrongAnswers,
}

/// Everything the report view shows, derived from one outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
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

    #[serde(deserialize_with = "zero_if_null")]
    pub total_missed_reward: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_fail_reason: Option<ValidationFailReason>,
    pub advice: CategoryAdvice,
    pub score_tier: Tier,
    pub earnings_tier: Tier,
}

impl SummaryView {
    pub fn from_json_str(raw: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Pure `ValidationOutcome -> SummaryView` transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryDeriver {
    config: DeriverConfig,
}

impl SummaryDeriver {
    pub fn new(config: DeriverConfig) -> Result<Self, ReportError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Only meaningful when `outcome.is_validated` is false.
    pub fn derive_fail_reason(&self, outcome: &ValidationOutcome) -> ValidationFailReason {
        if !outcome.did_miss_validation {
            ValidationFailReason::WrongAnswers
        } else if outcome.short_session.total_flips > 0 {
            ValidationFailReason::LateSubmission
        } else {
            ValidationFailReason::MissedValidation
        }
    }

    pub fn derive_score_tier(&self, score: f64) -> Tier {
        self.config.score_tiers.classify(score)
    }

    pub fn derive_earnings_tier(&self, score: f64) -> Tier {
        self.config.earnings_tiers.classify(score)
    }

    pub fn derive_category_advice(
        &self,
        category: RewardCategory,
        outcome: &ValidationOutcome,
    ) -> AdviceKey {
        advice_for(category, outcome, self.config.advice_source)
    }

    pub fn summarize(&self, outcome: &ValidationOutcome) -> SummaryView {
        warn_unnormalized(&outcome.identity_address, "totalScore", outcome.total_score);
        warn_unnormalized(&outcome.identity_address, "earningsScore", outcome.earnings_score);

        let validation_fail_reason =
            (!outcome.is_validated).then(|| self.derive_fail_reason(outcome));
        let advice = CategoryAdvice {
            validation: self.derive_category_advice(RewardCategory::Validation, outcome),
            flips: self.derive_category_advice(RewardCategory::Flips, outcome),
            invitations: self.derive_category_advice(RewardCategory::Invitations, outcome),
            flip_reports: self.derive_category_advice(RewardCategory::FlipReports, outcome),
        };
        let view = SummaryView {
            is_validated: outcome.is_validated,
            short_session: outcome.short_session,
            long_session: outcome.long_session,
            total_score: outcome.total_score,
            earnings: outcome.earnings,
            earnings_score: outcome.earnings_score,
            rewards: outcome.rewards,
            validation_penalty: outcome.validation_penalty,
            did_miss_validation: outcome.did_miss_validation,
            identity_address: outcome.identity_address.clone(),
            total_missed_reward: outcome.rewards.total_missed(),
            validation_fail_reason,
            advice,
            score_tier: self.derive_score_tier(outcome.total_score),
            earnings_tier: self.derive_earnings_tier(outcome.earnings_score),
        };

        debug!(
            identity = %view.identity_address,
            validated = view.is_validated,
            score_tier = ?view.score_tier,
            earnings_tier = ?view.earnings_tier,
            fail_reason = ?view.validation_fail_reason,
            total_missed = view.total_missed_reward,
            "derived validation summary"
        );
        view
    }
}

// Out-of-range scores pass through untouched; this only makes them visible.
fn warn_unnormalized(identity: &str, field: &str, score: f64) {
    if !(0.0..=1.0).contains(&score) {
        warn!(identity, field, score, "score outside [0, 1], passing through");
    }
}

pub fn derive_fail_reason(outcome: &ValidationOutcome) -> ValidationFailReason {
    SummaryDeriver::default().derive_fail_reason(outcome)
}

pub fn summarize(outcome: &ValidationOutcome) -> SummaryView {
    SummaryDeriver::default().summarize(outcome)
}
