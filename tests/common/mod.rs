use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const CATALOG_FIXTURE: &str = "tests/fixtures/catalog.json";

/// Writes an applications CSV with the given rows under the standard header.
pub fn applications_csv(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        "loan_type_id, amount, term_days, term_months, frequency, collateral_value"
    )?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}

/// Writes a catalog holding one percentage-only product.
pub fn percentage_catalog() -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"[{{
            "id": 10,
            "name": "Agri Loan",
            "code": "AG",
            "category": "loan",
            "currency": "KES",
            "application_fee_type": "percentage",
            "application_fee_rate": 0.01,
            "disbursement_fee_type": "percentage",
            "disbursement_fee_rate": 0.005,
            "management_fee_rate": 0.0125,
            "vat_applicable": true,
            "vat_rate": 0.16
        }}]"#
    )?;
    file.flush()?;
    Ok(file)
}

/// Parses JSON-lines output into values.
pub fn quotes(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("quote line is valid JSON"))
        .collect()
}
