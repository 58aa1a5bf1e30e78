mod metrics;


pub use metrics::{MetricsError, ReportMetrics};
