use crate::messages::{advice_message, category_description, category_label, MessageKey};
use crate::number::NumberStyle;
use report_core::{AdviceKey, RewardCategory, SessionResult, SummaryView, Tier};
use serde::Serialize;

/// Smallest bar drawn so an empty gauge is still visible.
pub const MIN_GAUGE_VALUE: f64 = 2.0;

pub const EXPLORER_BASE_URL: &str = "https://scan.idena.io";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Headline {
    SuccessfullyValidated,
    /// Validated, but flips were reported.
    Validated,
    ValidationFailed,
}

impl Headline {
    pub fn from_summary(summary: &SummaryView) -> Self {
        match (summary.is_validated, summary.validation_penalty) {
            (false, _) => Headline::ValidationFailed,
            (true, true) => Headline::Validated,
            (true, false) => Headline::SuccessfullyValidated,
        }
    }
}

pub fn tier_color(tier: Tier) -> &'static str {
    match tier {
        Tier::Poor => "red.500",
        Tier::Fair => "orange.500",
        Tier::Good => "green.500",
    }
}

pub fn advice_color(advice: AdviceKey) -> Option<&'static str> {
    match advice {
        AdviceKey::Penalized => Some("red.500"),
        AdviceKey::MissedSome => None,
        AdviceKey::Maxed => Some("green.500"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gauge {
    /// Bar fill in [0, 100].
    pub value: f64,
    pub tier: Tier,
    pub color: &'static str,
    pub stat: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub category: RewardCategory,
    pub label: &'static str,
    pub description: &'static str,
    pub earned: String,
    pub missed: String,
    pub advice: AdviceKey,
    pub advice_text: &'static str,
    pub advice_color: Option<&'static str>,
}

/// Display-ready values for one report. Built from a summary, never stored back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPresentation {
    pub headline: Headline,
    pub headline_text: &'static str,
    pub score_gauge: Gauge,
    pub earnings_gauge: Gauge,
    pub short_session: String,
    pub long_session: String,
    pub total_score: String,
    pub missed_invitation: String,
    pub missed_flip_report: String,
    pub missed_flip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_link: Option<String>,
    pub rows: Vec<TableRow>,
}

impl ReportPresentation {
    pub fn build(summary: &SummaryView, epoch: Option<u64>, style: &NumberStyle) -> Self {
        let headline = Headline::from_summary(summary);
        let rewards = &summary.rewards;
        let rows = RewardCategory::ALL
            .into_iter()
            .map(|category| {
                let pair = rewards.get(category);
                let advice = summary.advice.get(category);
                TableRow {
                    category,
                    label: category_label(category),
                    description: category_description(category),
                    earned: style.amount(pair.earned),
                    missed: style.amount(pair.missed),
                    advice,
                    advice_text: advice_message(category, advice),
                    advice_color: advice_color(advice),
                }
            })
            .collect();

        Self {
            headline,
            headline_text: headline.message_key(),
            score_gauge: score_gauge(summary, style),
            earnings_gauge: earnings_gauge(summary, style),
            short_session: session_stat(style, &summary.short_session),
            long_session: session_stat(style, &summary.long_session),
            total_score: style.percent(summary.total_score),
            missed_invitation: style.dna(rewards.invitation.missed),
            missed_flip_report: style.dna(rewards.flip_report.missed),
            missed_flip: style.dna(rewards.flip.missed),
            explorer_link: epoch
                .map(|e| explorer_link(&summary.identity_address, e, summary.is_validated)),
            rows,
        }
    }
}

fn gauge_value(fraction: f64) -> f64 {
    let value = fraction * 100.0;
    if value == 0.0 || value.is_nan() {
        MIN_GAUGE_VALUE
    } else {
        value
    }
}

fn score_gauge(summary: &SummaryView, style: &NumberStyle) -> Gauge {
    if summary.is_validated {
        return Gauge {
            value: summary.total_score * 100.0,
            tier: summary.score_tier,
            color: tier_color(summary.score_tier),
            stat: style.percent(summary.total_score),
            label: "Score".into(),
        };
    }
    let label = summary
        .validation_fail_reason
        .map(|reason| reason.message_key())
        .unwrap_or("Validation failed");
    Gauge {
        value: gauge_value(summary.short_session.score),
        tier: Tier::Poor,
        color: tier_color(Tier::Poor),
        stat: "Failed".into(),
        label: label.into(),
    }
}

fn earnings_gauge(summary: &SummaryView, style: &NumberStyle) -> Gauge {
    if summary.is_validated {
        return Gauge {
            value: gauge_value(summary.earnings_score),
            tier: summary.earnings_tier,
            color: tier_color(summary.earnings_tier),
            stat: style.dna(summary.earnings),
            label: "Earnings".into(),
        };
    }
    Gauge {
        value: MIN_GAUGE_VALUE,
        tier: Tier::Poor,
        color: tier_color(Tier::Poor),
        stat: style.dna(-summary.total_missed_reward),
        label: "Earnings".into(),
    }
}

/// `"{percent} ({correct} out of {flips})"`.
pub fn session_stat(style: &NumberStyle, session: &SessionResult) -> String {
    format!(
        "{} ({} out of {})",
        style.percent(session.score),
        session.correct_answers,
        session.total_flips
    )
}

pub fn explorer_link(address: &str, epoch: u64, is_validated: bool) -> String {
    let section = if is_validated { "rewards" } else { "validation" };
    format!("{EXPLORER_BASE_URL}/identity/{address}/epoch/{epoch}/{section}")
}
