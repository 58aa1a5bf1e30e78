use prometheus::{GaugeVec, Opts, Registry};
use report_core::{RewardCategory, SummaryView};
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("failed to register {name}: {source}")]
    Register {
        name: &'static str,
        #[source]
        source: prometheus::Error,
    },
    #[error("failed to build {name}: {source}")]
    Build {
        name: &'static str,
        #[source]
        source: prometheus::Error,
    },
}

pub struct ReportMetrics {
    pub total_score: GaugeVec,
    pub earnings: GaugeVec,
    pub total_missed_reward: GaugeVec,
    pub validated: GaugeVec,
    pub reward_earned: GaugeVec,
    pub reward_missed: GaugeVec,
}

fn gauge_vec(
    registry: &Registry,
    name: &'static str,
    help: &str,
    labels: &[&str],
) -> Result<GaugeVec, MetricsError> {
    let gauge = GaugeVec::new(Opts::new(name, help), labels)
        .map_err(|source| MetricsError::Build { name, source })?;
    registry
        .register(Box::new(gauge.clone()))
        .map_err(|source| MetricsError::Register { name, source })?;
    Ok(gauge)
}

impl ReportMetrics {
    pub fn new(registry: &Registry) -> Result<Self, MetricsError> {
        let total_score = gauge_vec(
            registry,
            "validation_report_total_score",
            "Total validation score in [0, 1]",
            &["identity"],
        )?;
        let earnings = gauge_vec(
            registry,
            "validation_report_earnings",
            "Epoch earnings in iDNA",
            &["identity"],
        )?;
        let total_missed_reward = gauge_vec(
            registry,
            "validation_report_total_missed_reward",
            "Sum of missed rewards across categories in iDNA",
            &["identity"],
        )?;
        let validated = gauge_vec(
            registry,
            "validation_report_validated",
            "1 when the identity passed validation, 0 otherwise",
            &["identity"],
        )?;
        let reward_earned = gauge_vec(
            registry,
            "validation_report_reward_earned",
            "Earned reward per category in iDNA",
            &["identity", "category"],
        )?;
        let reward_missed = gauge_vec(
            registry,
            "validation_report_reward_missed",
            "Missed reward per category in iDNA",
            &["identity", "category"],
        )?;

        Ok(Self {
            total_score,
            earnings,
            total_missed_reward,
            validated,
            reward_earned,
            reward_missed,
        })
    }

    pub fn observe(&self, summary: &SummaryView) {
        let identity = summary.identity_address.as_str();
        self.total_score
            .with_label_values(&[identity])
            .set(summary.total_score);
        self.earnings
            .with_label_values(&[identity])
            .set(summary.earnings);
        self.total_missed_reward
            .with_label_values(&[identity])
            .set(summary.total_missed_reward);
        self.validated
            .with_label_values(&[identity])
            .set(if summary.is_validated { 1.0 } else { 0.0 });

        for category in RewardCategory::ALL {
            let pair = summary.rewards.get(category);
            let labels = [identity, category.as_str()];
            self.reward_earned.with_label_values(&labels).set(pair.earned);
            self.reward_missed.with_label_values(&labels).set(pair.missed);
        }
        trace!(identity, "observed validation summary");
    }
}
