use report_cli::{run, Args, OutputFormat};
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn args(input: &str, format: OutputFormat) -> Args {
    Args {
        input: fixture(input),
        config: None,
        epoch: Some(98),
        format,
    }
}

#[test]
fn json_report_for_validated_identity() {
    let out = run(&args("validated.json", OutputFormat::Json)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["epoch"], 98);
    assert!(json["generatedAt"].is_string());
    let summary = &json["summary"];
    assert_eq!(summary["scoreTier"], "good");
    assert_eq!(summary["earningsTier"], "good");
    assert_eq!(summary["totalMissedReward"], 0.0);
    assert_eq!(summary["advice"]["validation"], "maxed");
    assert!(summary.get("validationFailReason").is_none());
    assert_eq!(json["presentation"]["headline"], "successfullyValidated");
}

#[test]
fn text_report_for_late_submission() {
    let out = run(&args("late_submission.json", OutputFormat::Text)).unwrap();
    assert!(out.contains("Validation failed"));
    assert!(out.contains("Late submission"));
    assert!(out.contains("-770.25 iDNA"));
    assert!(out.contains("/epoch/98/validation"));
}

#[test]
fn config_switches_advice_source() {
    let dir = std::env::temp_dir().join(format!("validation-report-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let config = dir.join("own_category.json");
    fs::write(&config, r#"{"adviceSource": "ownCategory"}"#).unwrap();

    let mut a = args("late_submission.json", OutputFormat::Json);
    a.config = Some(config);
    let out = run(&a).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["summary"]["validationFailReason"], "lateSubmission");
    assert_eq!(json["summary"]["advice"]["invitations"], "maxed");
    assert_eq!(json["summary"]["advice"]["flipReports"], "missedSome");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_input_reports_the_path() {
    let err = run(&args("does_not_exist.json", OutputFormat::Json)).unwrap_err();
    assert!(format!("{err:#}").contains("does_not_exist.json"));
}
