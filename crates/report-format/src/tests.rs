use crate::{
    advice_message, explorer_link, format_amount, format_dna, format_percent, render_text,
    session_stat, Headline, MessageKey, NumberStyle, ReportPresentation, MIN_GAUGE_VALUE,
    PLACEHOLDER,
};
use report_core::{
    summarize, AdviceKey, RewardCategory, RewardPair, Rewards, SessionResult, Tier,
    ValidationOutcome,
};

fn outcome() -> ValidationOutcome {
    ValidationOutcome {
        is_validated: true,
        short_session: SessionResult {
            score: 5.0 / 6.0,
            correct_answers: 5,
            total_flips: 6,
        },
        long_session: SessionResult {
            score: 0.9,
            correct_answers: 18,
            total_flips: 20,
        },
        total_score: 0.88,
        earnings: 1234.56789,
        earnings_score: 0.6,
        rewards: Rewards {
            validation: RewardPair { earned: 900.0, missed: 0.0 },
            invitation: RewardPair { earned: 0.0, missed: 120.25 },
            flip: RewardPair { earned: 300.5, missed: 15.0 },
            flip_report: RewardPair { earned: 34.06789, missed: 0.0 },
        },
        validation_penalty: false,
        did_miss_validation: false,
        identity_address: "0xfeed".into(),
    }
}

#[test]
fn amount_formatting() {
    assert_eq!(format_amount(0.0), PLACEHOLDER);
    assert_eq!(format_amount(f64::NAN), PLACEHOLDER);
    assert_eq!(format_amount(f64::INFINITY), PLACEHOLDER);
    assert_eq!(format_amount(1234.56789), "1,234.568");
    assert_eq!(format_amount(12.5), "12.5");
    assert_eq!(format_amount(1_000_000.0), "1,000,000");
    assert_eq!(format_amount(0.0004), "0");
    assert_eq!(format_amount(-42.25), "-42.25");
}

#[test]
fn halfway_amounts_round_away_from_zero() {
    assert_eq!(format_amount(513.3715), "513.372");
    assert_eq!(format_amount(130.2925), "130.293");
    assert_eq!(format_amount(1033.8825), "1,033.883");
    assert_eq!(format_amount(0.0005), "0.001");
    assert_eq!(format_amount(-513.3715), "-513.372");
    assert_eq!(format_dna(-130.2925), "-130.293 iDNA");
}

#[test]
fn rounding_carries_into_integer_digits() {
    assert_eq!(format_amount(9.9995), "10");
    assert_eq!(format_amount(999.9996), "1,000");
    assert_eq!(format_amount(0.9999), "1");
    assert_eq!(format_amount(-0.0004), "0");
}

#[test]
fn huge_amounts_stay_numeric() {
    let formatted = format_amount(1e306);
    assert!(formatted.starts_with("1,000,000,"));
    assert!(!formatted.contains("inf"));
    assert_eq!(formatted.matches(',').count(), 102);
    assert_eq!(format_percent(f64::MAX), PLACEHOLDER);
}

#[test]
fn dna_formatting_keeps_zero() {
    assert_eq!(format_dna(0.0), "0 iDNA");
    assert_eq!(format_dna(-150.1234), "-150.123 iDNA");
    assert_eq!(format_dna(f64::NAN), PLACEHOLDER);
}

#[test]
fn percent_formatting() {
    assert_eq!(format_percent(0.8567), "85.67%");
    assert_eq!(format_percent(1.0), "100%");
    assert_eq!(format_percent(0.0), "0%");
    assert_eq!(format_percent(0.123456), "12.35%");
    assert_eq!(format_percent(f64::NAN), PLACEHOLDER);
}

#[test]
fn custom_separators() {
    let style = NumberStyle {
        decimal_separator: ',',
        group_separator: Some(' '),
    };
    assert_eq!(style.amount(1234.5), "1 234,5");

    let plain = NumberStyle {
        decimal_separator: '.',
        group_separator: None,
    };
    assert_eq!(plain.amount(98765.4321), "98765.432");
}

#[test]
fn headline_selection() {
    let mut o = outcome();
    assert_eq!(Headline::from_summary(&summarize(&o)), Headline::SuccessfullyValidated);
    o.validation_penalty = true;
    assert_eq!(Headline::from_summary(&summarize(&o)), Headline::Validated);
    o.is_validated = false;
    assert_eq!(Headline::from_summary(&summarize(&o)), Headline::ValidationFailed);
    assert_eq!(Headline::ValidationFailed.message_key(), "Validation failed");
}

#[test]
fn explorer_link_section_follows_status() {
    assert_eq!(
        explorer_link("0xfeed", 42, true),
        "https://scan.idena.io/identity/0xfeed/epoch/42/rewards"
    );
    assert_eq!(
        explorer_link("0xfeed", 42, false),
        "https://scan.idena.io/identity/0xfeed/epoch/42/validation"
    );
}

#[test]
fn session_stat_line() {
    let session = SessionResult {
        score: 0.5,
        correct_answers: 3,
        total_flips: 6,
    };
    assert_eq!(session_stat(&NumberStyle::default(), &session), "50% (3 out of 6)");
}

#[test]
fn validated_presentation() {
    let summary = summarize(&outcome());
    let p = ReportPresentation::build(&summary, Some(42), &NumberStyle::default());

    assert_eq!(p.score_gauge.tier, Tier::Fair);
    assert_eq!(p.score_gauge.color, "orange.500");
    assert_eq!(p.score_gauge.stat, "88%");
    assert_eq!(p.earnings_gauge.tier, Tier::Fair);
    assert_eq!(p.earnings_gauge.stat, "1,234.568 iDNA");
    assert_eq!(p.short_session, "83.33% (5 out of 6)");
    assert_eq!(p.missed_invitation, "120.25 iDNA");
    assert_eq!(p.missed_flip_report, "0 iDNA");

    let rows: Vec<_> = p.rows.iter().map(|r| (r.category, r.advice)).collect();
    assert_eq!(
        rows,
        vec![
            (RewardCategory::Validation, AdviceKey::Maxed),
            (RewardCategory::Flips, AdviceKey::MissedSome),
            (RewardCategory::Invitations, AdviceKey::MissedSome),
            (RewardCategory::FlipReports, AdviceKey::MissedSome),
        ]
    );
    assert_eq!(p.rows[0].missed, PLACEHOLDER);
    assert_eq!(p.rows[0].advice_color, Some("green.500"));
    assert_eq!(p.rows[1].advice_text, "Make flips carefully");
    assert_eq!(p.rows[2].earned, PLACEHOLDER);
    assert_eq!(p.rows[3].earned, "34.068");
    assert_eq!(
        p.explorer_link.as_deref(),
        Some("https://scan.idena.io/identity/0xfeed/epoch/42/rewards")
    );
}

#[test]
fn failed_presentation() {
    let mut o = outcome();
    o.is_validated = false;
    o.did_miss_validation = true;
    o.short_session.score = 0.0;
    let summary = summarize(&o);
    let p = ReportPresentation::build(&summary, None, &NumberStyle::default());

    assert_eq!(p.score_gauge.value, MIN_GAUGE_VALUE);
    assert_eq!(p.score_gauge.tier, Tier::Poor);
    assert_eq!(p.score_gauge.stat, "Failed");
    assert_eq!(p.score_gauge.label, "Late submission");
    assert_eq!(p.earnings_gauge.value, MIN_GAUGE_VALUE);
    assert_eq!(p.earnings_gauge.stat, "-135.25 iDNA");
    assert!(p.explorer_link.is_none());
}

#[test]
fn penalized_advice_text() {
    assert_eq!(
        advice_message(RewardCategory::Invitations, AdviceKey::Penalized),
        "Your flips were reported. Make flips carefully"
    );
    assert_eq!(
        advice_message(RewardCategory::FlipReports, AdviceKey::MissedSome),
        "Report all flips that break the rules"
    );
}

#[test]
fn text_report_lists_every_category() {
    let summary = summarize(&outcome());
    let text = render_text(&summary, Some(7), &NumberStyle::default());
    assert!(text.starts_with("Epoch #7 validation report\nSuccessfully validated\n"));
    for label in ["Validation", "Flips", "Invitations", "Flip reports"] {
        assert!(text.contains(label), "missing {label}");
    }
    assert!(text.contains("/identity/0xfeed/epoch/7/rewards"));
}

#[test]
fn presentation_serializes() {
    let summary = summarize(&outcome());
    let p = ReportPresentation::build(&summary, None, &NumberStyle::default());
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["headline"], "successfullyValidated");
    assert_eq!(json["rows"][1]["advice"], "missedSome");
    assert!(json.get("explorerLink").is_none());
}
