use crate::domain::loan_type::{ApplicationFee, DisbursementFee, LoanTypeConfig, TermRule};
use crate::domain::money::{Amount, Money, Rate};
use crate::domain::pricing::{FeeCalculationResult, ValidationResult};

/// Prices and validates loan applications against a loan product.
///
/// Both operations are pure: they never mutate the product, never fail, and
/// return identical output for identical input. Incomplete fee setup prices at
/// zero and rule violations come back as data, so a caller can always render
/// a result.
pub struct LoanPricingEngine;

impl LoanPricingEngine {
    /// Computes the fee breakdown for `amount`.
    ///
    /// `term_days` and `term_months` are accepted for term-based pricing but do
    /// not currently affect any fee line.
    pub fn calculate_fees(
        config: &LoanTypeConfig,
        amount: Amount,
        _term_days: Option<u32>,
        _term_months: Option<u32>,
    ) -> FeeCalculationResult {
        let application_fee = match config.application_fee {
            ApplicationFee::Percentage(rate) => amount * rate,
            ApplicationFee::Fixed(fixed) => fixed,
            ApplicationFee::Unset => Money::ZERO,
        };

        let disbursement_fee = match &config.disbursement_fee {
            DisbursementFee::Percentage(rate) => amount * *rate,
            DisbursementFee::Fixed(fixed) => *fixed,
            DisbursementFee::Tiered(tiers) => tiers
                .iter()
                .find(|tier| tier.contains(amount.money()))
                .map_or(Money::ZERO, |tier| tier.fee),
            DisbursementFee::Unset => Money::ZERO,
        };

        let management_fee = percentage_of(amount, config.management_fee_rate);
        let risk_premium_fee = percentage_of(amount, config.risk_premium_fee_rate);

        let vat_on = |fee: Money| config.vat.map_or(Money::ZERO, |rate| fee * rate);
        let application_fee_vat = vat_on(application_fee);
        let disbursement_fee_vat = vat_on(disbursement_fee);
        let management_fee_vat = vat_on(management_fee);
        let risk_premium_fee_vat = vat_on(risk_premium_fee);

        let total_fees_before_vat =
            application_fee + disbursement_fee + management_fee + risk_premium_fee;
        let total_vat = application_fee_vat
            + disbursement_fee_vat
            + management_fee_vat
            + risk_premium_fee_vat;

        FeeCalculationResult {
            loan_type_id: config.id,
            loan_type_name: config.name.clone(),
            applied_amount: amount.money(),
            currency: config.currency.clone(),
            application_fee,
            disbursement_fee,
            management_fee,
            risk_premium_fee,
            application_fee_vat,
            disbursement_fee_vat,
            management_fee_vat,
            risk_premium_fee_vat,
            total_fees_before_vat,
            total_vat,
            total_fees_including_vat: total_fees_before_vat + total_vat,
        }
    }

    /// Checks the application against every configured constraint and
    /// collects all violations, in rule order.
    pub fn validate_loan_parameters(
        config: &LoanTypeConfig,
        amount: Amount,
        term_days: Option<u32>,
        term_months: Option<u32>,
        frequency: Option<&str>,
        collateral_value: Option<Money>,
    ) -> ValidationResult {
        let mut errors = Vec::new();
        let currency = &config.currency;
        let amount_money = amount.money();

        if let Some(min) = config.min_amount
            && amount_money < min
        {
            errors.push(format!("Minimum loan amount is {currency} {}", min.grouped()));
        }
        if let Some(max) = config.max_amount
            && amount_money > max
        {
            errors.push(format!("Maximum loan amount is {currency} {}", max.grouped()));
        }

        match config.term {
            TermRule::Fixed { days } => {
                if let Some(requested) = term_days
                    && requested != days
                {
                    errors.push(format!("Loan term must be exactly {days} days"));
                }
            }
            TermRule::Range {
                min_days,
                max_days,
                min_months,
                max_months,
            } => {
                if let Some(requested) = term_days {
                    if let Some(min) = min_days
                        && requested < min
                    {
                        errors.push(format!("Minimum loan term is {min} days"));
                    }
                    if let Some(max) = max_days
                        && requested > max
                    {
                        errors.push(format!("Maximum loan term is {max} days"));
                    }
                }
                if let Some(requested) = term_months {
                    if let Some(min) = min_months
                        && requested < min
                    {
                        errors.push(format!("Minimum loan term is {min} months"));
                    }
                    if let Some(max) = max_months
                        && requested > max
                    {
                        errors.push(format!("Maximum loan term is {max} months"));
                    }
                }
            }
        }

        if let Some(allowed) = &config.allowed_frequencies {
            let permitted = frequency.is_some_and(|f| allowed.iter().any(|a| a == f));
            if !permitted {
                errors.push(format!(
                    "Repayment frequency must be one of: {}",
                    allowed.join(", ")
                ));
            }
        }

        if let Some(requirement) = config.collateral {
            let required = amount * requirement.min_ratio;
            let sufficient = collateral_value.is_some_and(|value| value >= required);
            if !sufficient {
                errors.push(format!(
                    "Minimum collateral value required is {currency} {}",
                    required.grouped()
                ));
            }
        }

        ValidationResult::from_errors(errors)
    }
}

fn percentage_of(amount: Amount, rate: Option<Rate>) -> Money {
    rate.map_or(Money::ZERO, |rate| amount * rate)
}
