use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("malformed report input: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid {name} thresholds: fair={fair}, good={good}")]
    InvalidThresholds {
        name: &'static str,
        fair: f64,
        good: f64,
    },
}
