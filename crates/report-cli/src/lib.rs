use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use report_core::{DeriverConfig, SummaryDeriver, SummaryView, ValidationOutcome};
use report_format::{render_text, NumberStyle, ReportPresentation};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Summarise one epoch's validation outcome.
#[derive(Debug, Parser)]
#[command(name = "validation-report", version)]
pub struct Args {
    /// Outcome record as JSON.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Deriver config as JSON (tier thresholds, advice source).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Epoch number, used for the title and explorer link.
    #[arg(short, long)]
    pub epoch: Option<u64>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEnvelope {
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoch: Option<u64>,
    pub summary: SummaryView,
    pub presentation: ReportPresentation,
}

pub fn load_config(path: Option<&Path>) -> Result<DeriverConfig> {
    let Some(path) = path else {
        return Ok(DeriverConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    DeriverConfig::from_json_str(&raw)
        .with_context(|| format!("parsing config {}", path.display()))
}

pub fn load_outcome(path: &Path) -> Result<ValidationOutcome> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading outcome {}", path.display()))?;
    ValidationOutcome::from_json_str(&raw)
        .with_context(|| format!("parsing outcome {}", path.display()))
}

pub fn run(args: &Args) -> Result<String> {
    let config = load_config(args.config.as_deref())?;
    let deriver = SummaryDeriver::new(config)?;
    let outcome = load_outcome(&args.input)?;
    let summary = deriver.summarize(&outcome);
    info!(
        identity = %summary.identity_address,
        validated = summary.is_validated,
        "summarised validation outcome"
    );

    let style = NumberStyle::default();
    match args.format {
        OutputFormat::Text => Ok(render_text(&summary, args.epoch, &style)),
        OutputFormat::Json => {
            let presentation = ReportPresentation::build(&summary, args.epoch, &style);
            let envelope = ReportEnvelope {
                generated_at: Utc::now(),
                epoch: args.epoch,
                summary,
                presentation,
            };
            serde_json::to_string_pretty(&envelope).context("serializing report")
        }
    }
}
