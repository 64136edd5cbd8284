//! Integration tests that drive the report builder the way the binary does.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use salary_cli::app::{OutputFormat, ReportRequest, build_report};
use salary_core::TaxInputs;

fn request(inputs: TaxInputs) -> ReportRequest {
    ReportRequest {
        inputs,
        format: OutputFormat::Table,
        show_slabs: false,
    }
}

#[test]
fn table_report_starts_with_description() {
    let report = build_report(&request(TaxInputs::new(dec!(1200000), dec!(50)))).unwrap();

    let first_line = report.lines().next().unwrap();
    assert!(first_line.starts_with("Employee PF deducted"));
    assert!(report.contains("₹10,71,000"));
    assert!(!report.contains("Employer PF Deduction"));
    assert!(!report.contains("Gratuity"));
}

#[test]
fn table_report_shows_optional_rows_when_toggled() {
    let inputs = TaxInputs::new(dec!(1200000), dec!(50))
        .with_employer_pf(true)
        .with_gratuity(true);

    let report = build_report(&request(inputs)).unwrap();

    assert!(report.contains("Employer PF Deduction"));
    assert!(report.contains("Gratuity"));
    assert!(report.contains("₹28,860"));
    assert!(report.contains("₹9,70,140"));
}

#[test]
fn table_report_appends_slab_table_on_request() {
    let mut request = request(TaxInputs::new(dec!(1200000), dec!(50)));
    request.show_slabs = true;

    let report = build_report(&request).unwrap();

    assert!(report.contains("Income tax by slab"));
    assert!(report.contains("₹8,00,000 – ₹12,00,000"));
}

#[test]
fn json_report_contains_inputs_and_result() {
    let mut request = request(TaxInputs::new(dec!(1200000), dec!(50)).with_employer_pf(true));
    request.format = OutputFormat::Json;

    let report = build_report(&request).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(json["inputs"]["employerPfIncluded"], true);
    let total_tax: Decimal = json["result"]["totalTax"].as_str().unwrap().parse().unwrap();
    assert_eq!(total_tax, dec!(57000));
    assert!(json.get("slabs").is_none());
}

#[test]
fn json_report_includes_slabs_on_request() {
    let mut request = request(TaxInputs::new(dec!(300000), dec!(50)));
    request.format = OutputFormat::Json;
    request.show_slabs = true;

    let report = build_report(&request).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(json["slabs"].as_array().unwrap().len(), 6);
}

#[test]
fn negative_salary_is_rejected() {
    let error = build_report(&request(TaxInputs::new(dec!(-1), dec!(50)))).unwrap_err();

    assert_eq!(error.to_string(), "invalid salary inputs");
    assert_eq!(
        error.root_cause().to_string(),
        "gross salary must be non-negative, got -1"
    );
}
