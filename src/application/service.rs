use super::engine::LoanPricingEngine;
use crate::domain::application::LoanApplication;
use crate::domain::loan_type::LoanTypeConfig;
use crate::domain::ports::LoanTypeStoreBox;
use crate::domain::pricing::LoanQuote;
use crate::error::{PricingError, Result};
use tracing::debug;

/// Resolves the loan product for each application and runs it through the
/// pricing engine.
pub struct QuoteService {
    loan_types: LoanTypeStoreBox,
}

impl QuoteService {
    pub fn new(loan_types: LoanTypeStoreBox) -> Self {
        Self { loan_types }
    }

    /// Adds or replaces a product in the backing store.
    pub async fn register(&self, config: LoanTypeConfig) -> Result<()> {
        self.loan_types.store(config).await
    }

    /// Prices and validates one application.
    ///
    /// Fees are computed even when validation fails so the caller can show
    /// both. The only error is a missing product (or a store failure).
    pub async fn quote(&self, application: &LoanApplication) -> Result<LoanQuote> {
        let config = self
            .loan_types
            .get(application.loan_type_id)
            .await?
            .ok_or(PricingError::UnknownLoanType(application.loan_type_id))?;

        let validation = LoanPricingEngine::validate_loan_parameters(
            &config,
            application.amount,
            application.term_days,
            application.term_months,
            application.frequency.as_deref(),
            application.collateral_value,
        );
        let fees = LoanPricingEngine::calculate_fees(
            &config,
            application.amount,
            application.term_days,
            application.term_months,
        );

        debug!(
            loan_type_id = config.id,
            amount = %application.amount.value(),
            total_fees = %fees.total_fees_including_vat,
            valid = validation.is_valid,
            "quoted application"
        );

        Ok(LoanQuote {
            loan_type_id: config.id,
            fees,
            validation,
        })
    }
}
