use crate::domain::application::LoanApplication;
use crate::domain::money::{Amount, Money};
use crate::error::{PricingError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// Raw CSV row. Money cells stay textual so they reach `Decimal` without
/// passing through `f64`.
#[derive(Debug, Deserialize)]
struct ApplicationRow {
    loan_type_id: u32,
    amount: String,
    term_days: Option<u32>,
    term_months: Option<u32>,
    frequency: Option<String>,
    collateral_value: Option<String>,
}

impl ApplicationRow {
    fn into_application(self) -> Result<LoanApplication> {
        let amount = Amount::new(parse_decimal("amount", &self.amount)?)?;
        let collateral_value = self
            .collateral_value
            .map(|cell| parse_decimal("collateral_value", &cell).and_then(Money::try_from))
            .transpose()?;

        Ok(LoanApplication {
            loan_type_id: self.loan_type_id,
            amount,
            term_days: self.term_days,
            term_months: self.term_months,
            frequency: self.frequency,
            collateral_value,
        })
    }
}

fn parse_decimal(column: &str, cell: &str) -> Result<Decimal> {
    Decimal::from_str_exact(cell).map_err(|e| {
        PricingError::ValidationError(format!("invalid {column} '{cell}': {e}"))
    })
}

/// Reads loan applications from a CSV source.
///
/// Expected header: `loan_type_id, amount, term_days, term_months, frequency,
/// collateral_value`. Empty cells become `None`; a malformed row yields an
/// error for that row only.
pub struct ApplicationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ApplicationReader<R> {
    /// Creates a new `ApplicationReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes applications.
    pub fn applications(self) -> impl Iterator<Item = Result<LoanApplication>> {
        self.reader
            .into_deserialize::<ApplicationRow>()
            .map(|result| {
                result
                    .map_err(PricingError::from)
                    .and_then(ApplicationRow::into_application)
            })
    }
}
