mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::process::Command;
use std::str::FromStr;

fn decimal(value: &serde_json::Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("money is serialized as a string"))
        .expect("money parses as decimal")
}

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("loan-pricing"));
    cmd.arg("tests/fixtures/applications.csv")
        .arg("--catalog")
        .arg(common::CATALOG_FIXTURE);

    let output = cmd.assert().success().get_output().clone();
    let quotes = common::quotes(&output.stdout);
    assert_eq!(quotes.len(), 3);

    // Valid business loan: tiered disbursement plus VAT on every line.
    let business = &quotes[0];
    assert_eq!(business["loan_type_id"], 1);
    assert_eq!(business["validation"]["isValid"], true);
    assert_eq!(business["validation"]["errors"], serde_json::json!([]));
    let fees = &business["fees"];
    assert_eq!(fees["loan_type_name"], "Business Loan");
    assert_eq!(fees["currency"], "UGX");
    assert_eq!(decimal(&fees["application_fee"]), dec!(5000));
    assert_eq!(decimal(&fees["disbursement_fee"]), dec!(2000));
    assert_eq!(decimal(&fees["management_fee"]), dec!(10000));
    assert_eq!(decimal(&fees["risk_premium_fee"]), dec!(2500));
    assert_eq!(decimal(&fees["total_fees_before_vat"]), dec!(19500));
    assert_eq!(decimal(&fees["total_vat"]), dec!(3510));
    assert_eq!(decimal(&fees["total_fees_including_vat"]), dec!(23010));

    // Every violated rule is reported, in order.
    let rejected = &quotes[1];
    assert_eq!(rejected["validation"]["isValid"], false);
    assert_eq!(
        rejected["validation"]["errors"],
        serde_json::json!([
            "Minimum loan amount is UGX 100,000",
            "Repayment frequency must be one of: monthly, quarterly",
            "Minimum collateral value required is UGX 60,000"
        ])
    );
    assert_eq!(decimal(&rejected["fees"]["disbursement_fee"]), dec!(500));

    let advance = &quotes[2];
    assert_eq!(
        advance["validation"]["errors"],
        serde_json::json!(["Loan term must be exactly 30 days"])
    );
    assert_eq!(decimal(&advance["fees"]["application_fee"]), dec!(10000));
    assert_eq!(decimal(&advance["fees"]["total_vat"]), Decimal::ZERO);

    Ok(())
}

#[test]
fn test_cli_scale_rounds_output() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = common::percentage_catalog()?;
    let applications = common::applications_csv(&["10, 33333, , , , "])?;

    let mut cmd = Command::new(cargo_bin!("loan-pricing"));
    cmd.arg(applications.path())
        .arg("--catalog")
        .arg(catalog.path())
        .arg("--scale")
        .arg("2");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""application_fee":"333.33""#))
        .stdout(predicate::str::contains(r#""disbursement_fee":"166.67""#))
        .stdout(predicate::str::contains(r#""management_fee":"416.66""#));

    Ok(())
}

#[test]
fn test_cli_missing_catalog_fails() {
    let applications = common::applications_csv(&["1, 1000, , , , "]).unwrap();

    let mut cmd = Command::new(cargo_bin!("loan-pricing"));
    cmd.arg(applications.path())
        .arg("--catalog")
        .arg("tests/fixtures/does_not_exist.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("opening catalog"));
}

#[test]
fn test_cli_requires_catalog_argument() {
    let mut cmd = Command::new(cargo_bin!("loan-pricing"));
    cmd.arg("tests/fixtures/applications.csv");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--catalog"));
}
