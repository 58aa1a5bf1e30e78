use crate::number::NumberStyle;
use crate::presentation::ReportPresentation;
use report_core::SummaryView;
use std::fmt::Write;

/// Plain-text report, one section per block of the report screen.
pub fn render_text(summary: &SummaryView, epoch: Option<u64>, style: &NumberStyle) -> String {
    let p = ReportPresentation::build(summary, epoch, style);
    let mut out = String::new();

    match epoch {
        Some(e) => {
            let _ = writeln!(out, "Epoch #{e} validation report");
        }
        None => out.push_str("Validation report\n"),
    }
    let _ = writeln!(out, "{}", p.headline_text);
    let _ = writeln!(out, "Identity: {}", summary.identity_address);
    out.push('\n');

    let _ = writeln!(
        out,
        "{}: {} [{}]",
        p.score_gauge.label, p.score_gauge.stat, p.score_gauge.color
    );
    let _ = writeln!(out, "  Short session: {}", p.short_session);
    let _ = writeln!(out, "  Long session: {}", p.long_session);
    let _ = writeln!(out, "  Total score: {}", p.total_score);
    let _ = writeln!(
        out,
        "{}: {} [{}]",
        p.earnings_gauge.label, p.earnings_gauge.stat, p.earnings_gauge.color
    );
    let _ = writeln!(out, "  Missed invitation earnings: {}", p.missed_invitation);
    let _ = writeln!(out, "  Missed reporting earnings: {}", p.missed_flip_report);
    let _ = writeln!(out, "  Missed flip earnings: {}", p.missed_flip);
    out.push('\n');

    out.push_str("Earnings summary\n");
    let _ = writeln!(
        out,
        "{:<14}{:>14}{:>14}  {}",
        "Category", "Earned, iDNA", "Missed, iDNA", "How to get maximum reward"
    );
    for row in &p.rows {
        let _ = writeln!(
            out,
            "{:<14}{:>14}{:>14}  {}",
            row.label, row.earned, row.missed, row.advice_text
        );
    }
    if let Some(link) = &p.explorer_link {
        let _ = writeln!(out, "\nSee the full report in blockchain explorer: {link}");
    }
    out
}
