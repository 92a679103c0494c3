use crate::domain::loan_type::{LoanTypeConfig, LoanTypeRecord};
use crate::error::Result;
use std::io::Read;

/// Reads a loan product catalog: a JSON array of flat loan type records.
pub fn read_catalog<R: Read>(source: R) -> Result<Vec<LoanTypeConfig>> {
    let records: Vec<LoanTypeRecord> = serde_json::from_reader(source)?;
    Ok(records.into_iter().map(LoanTypeConfig::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::loan_type::{ApplicationFee, DisbursementFee, TermRule};
    use crate::domain::money::{Money, Rate};
    use crate::error::PricingError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_read_catalog() {
        let json = r#"[
            {
                "id": 1,
                "name": "Business Loan",
                "code": "BL",
                "category": "loan",
                "currency": "UGX",
                "application_fee_type": "fixed_amount",
                "application_fee_fixed": 20000,
                "disbursement_fee_type": "tiered",
                "disbursement_fee_tiers": [
                    {"min_amount": 0, "max_amount": 100000, "fee": 500},
                    {"min_amount": 100001, "max_amount": 1000000, "fee": 2000}
                ],
                "min_amount": 100000,
                "max_amount": 50000000,
                "fixed_term_days": 30
            },
            {
                "id": 2,
                "name": "Bid Bond",
                "code": "BB",
                "category": "guarantee",
                "currency": "UGX"
            }
        ]"#;

        let catalog = read_catalog(json.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);

        let business = &catalog[0];
        assert_eq!(
            business.application_fee,
            ApplicationFee::Fixed(Money::new(dec!(20000)))
        );
        assert!(matches!(business.disbursement_fee, DisbursementFee::Tiered(ref tiers) if tiers.len() == 2));
        assert_eq!(business.term, TermRule::Fixed { days: 30 });
        assert_eq!(business.max_amount, Some(Money::new(dec!(50000000))));

        assert_eq!(catalog[1].application_fee, ApplicationFee::Unset);
    }

    #[test]
    fn test_read_catalog_rejects_malformed_json() {
        let result = read_catalog("{ not a list".as_bytes());
        assert!(matches!(result, Err(PricingError::JsonError(_))));
    }

    #[test]
    fn test_read_catalog_keeps_every_significant_digit() {
        let json = r#"[
            {
                "id": 3, "name": "Precise", "code": "PR", "category": "loan", "currency": "KES",
                "application_fee_type": "percentage",
                "application_fee_rate": 0.012345678901234567891,
                "disbursement_fee_type": "fixed_amount",
                "disbursement_fee_fixed": 12345.123456789012345678
            }
        ]"#;

        let catalog = read_catalog(json.as_bytes()).unwrap();
        assert_eq!(
            catalog[0].application_fee,
            ApplicationFee::Percentage(Rate::new(dec!(0.012345678901234567891)))
        );
        assert_eq!(
            catalog[0].disbursement_fee,
            DisbursementFee::Fixed(Money::new(dec!(12345.123456789012345678)))
        );
    }

    #[test]
    fn test_read_catalog_rejects_out_of_range_values() {
        let oversized_fee = r#"[{"id": 4, "name": "Big", "code": "BG", "category": "loan", "currency": "KES",
            "application_fee_type": "fixed_amount", "application_fee_fixed": 70000000000000000000000000000.5}]"#;
        assert!(matches!(
            read_catalog(oversized_fee.as_bytes()),
            Err(PricingError::JsonError(_))
        ));

        let oversized_rate = r#"[{"id": 4, "name": "Big", "code": "BG", "category": "loan", "currency": "KES",
            "vat_applicable": true, "vat_rate": 5000}]"#;
        assert!(matches!(
            read_catalog(oversized_rate.as_bytes()),
            Err(PricingError::JsonError(_))
        ));
    }
}
