use crate::outcome::{RewardCategory, ValidationOutcome};
use serde::{Deserialize, Serialize};

/// What the report suggests for one reward category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdviceKey {
    /// Flips were reported; overrides every other advice.
    Penalized,
    MissedSome,
    Maxed,
}

/// Which missed amount drives the Invitations and FlipReports advice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdviceSource {
    /// Invitations and FlipReports follow the Flips category's missed amount,
    /// matching the report as it has always behaved.
    #[default]
    FlipsFallback,
    /// Every category follows its own missed amount.
    OwnCategory,
}

/// Per-category advice, in report table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAdvice {
    pub validation: AdviceKey,
    pub flips: AdviceKey,
    pub invitations: AdviceKey,
    pub flip_reports: AdviceKey,
}

impl CategoryAdvice {
    pub fn get(&self, category: RewardCategory) -> AdviceKey {
        match category {
            RewardCategory::Validation => self.validation,
            RewardCategory::Flips => self.flips,
            RewardCategory::Invitations => self.invitations,
            RewardCategory::FlipReports => self.flip_reports,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RewardCategory, AdviceKey)> + '_ {
        RewardCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

fn signal_amount(
    category: RewardCategory,
    outcome: &ValidationOutcome,
    source: AdviceSource,
) -> f64 {
    let rewards = &outcome.rewards;
    match (category, source) {
        (
            RewardCategory::Invitations | RewardCategory::FlipReports,
            AdviceSource::FlipsFallback,
        ) => rewards.flip.missed,
        _ => rewards.get(category).missed,
    }
}

pub(crate) fn advice_for(
    category: RewardCategory,
    outcome: &ValidationOutcome,
    source: AdviceSource,
) -> AdviceKey {
    if outcome.validation_penalty {
        return AdviceKey::Penalized;
    }
    let missed = signal_amount(category, outcome, source);
    if missed != 0.0 && !missed.is_nan() {
        AdviceKey::MissedSome
    } else {
        AdviceKey::Maxed
    }
}

pub fn derive_category_advice(category: RewardCategory, outcome: &ValidationOutcome) -> AdviceKey {
    advice_for(category, outcome, AdviceSource::default())
}
