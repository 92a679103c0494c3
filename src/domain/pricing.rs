use super::money::Money;
use serde::Serialize;

/// Fee breakdown for one applied amount under one loan type.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct FeeCalculationResult {
    pub loan_type_id: u32,
    pub loan_type_name: String,
    pub applied_amount: Money,
    pub currency: String,

    pub application_fee: Money,
    pub disbursement_fee: Money,
    pub management_fee: Money,
    pub risk_premium_fee: Money,

    pub application_fee_vat: Money,
    pub disbursement_fee_vat: Money,
    pub management_fee_vat: Money,
    pub risk_premium_fee_vat: Money,

    pub total_fees_before_vat: Money,
    pub total_vat: Money,
    pub total_fees_including_vat: Money,
}

impl FeeCalculationResult {
    /// Rounds each fee and VAT line to `scale` places, then recomputes the
    /// totals from the rounded lines so they still add up.
    pub fn round_dp(mut self, scale: u32) -> Self {
        self.application_fee = self.application_fee.round_dp(scale);
        self.disbursement_fee = self.disbursement_fee.round_dp(scale);
        self.management_fee = self.management_fee.round_dp(scale);
        self.risk_premium_fee = self.risk_premium_fee.round_dp(scale);

        self.application_fee_vat = self.application_fee_vat.round_dp(scale);
        self.disbursement_fee_vat = self.disbursement_fee_vat.round_dp(scale);
        self.management_fee_vat = self.management_fee_vat.round_dp(scale);
        self.risk_premium_fee_vat = self.risk_premium_fee_vat.round_dp(scale);

        self.total_fees_before_vat = self.application_fee
            + self.disbursement_fee
            + self.management_fee
            + self.risk_premium_fee;
        self.total_vat = self.application_fee_vat
            + self.disbursement_fee_vat
            + self.management_fee_vat
            + self.risk_premium_fee_vat;
        self.total_fees_including_vat = self.total_fees_before_vat + self.total_vat;
        self
    }
}

/// Outcome of checking an application against a product's constraints.
///
/// `errors` holds one message per violated rule, in rule-check order.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct ValidationResult {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// What the quote service hands back for one application.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct LoanQuote {
    pub loan_type_id: u32,
    pub fees: FeeCalculationResult,
    pub validation: ValidationResult,
}
