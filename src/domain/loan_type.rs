use super::money::{Money, Rate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoanCategory {
    #[default]
    Loan,
    Guarantee,
    Finance,
}

/// One bracket of a tiered disbursement fee schedule. Bounds are inclusive and
/// `fee` is an absolute amount, not a rate.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct FeeTier {
    pub min_amount: Money,
    pub max_amount: Money,
    pub fee: Money,
}

impl FeeTier {
    pub fn contains(&self, amount: Money) -> bool {
        amount >= self.min_amount && amount <= self.max_amount
    }
}

/// How the application fee is charged.
///
/// `Unset` covers both "no fee configured" and "a fee type was chosen but its
/// paired value is missing"; either way the line prices at zero.
#[derive(Debug, PartialEq, Clone, Default)]
pub enum ApplicationFee {
    #[default]
    Unset,
    Percentage(Rate),
    Fixed(Money),
}

#[derive(Debug, PartialEq, Clone, Default)]
pub enum DisbursementFee {
    #[default]
    Unset,
    Percentage(Rate),
    Fixed(Money),
    /// Ordered, non-overlapping brackets; the first matching one wins.
    Tiered(Vec<FeeTier>),
}

/// Term constraints. A fixed term replaces all min/max checks.
#[derive(Debug, PartialEq, Clone)]
pub enum TermRule {
    Fixed {
        days: u32,
    },
    Range {
        min_days: Option<u32>,
        max_days: Option<u32>,
        min_months: Option<u32>,
        max_months: Option<u32>,
    },
}

impl Default for TermRule {
    fn default() -> Self {
        TermRule::Range {
            min_days: None,
            max_days: None,
            min_months: None,
            max_months: None,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CollateralRequirement {
    /// Collateral value must be at least `amount * min_ratio`.
    pub min_ratio: Rate,
}

/// Components that make up the nominal interest rate. Informational only; the
/// nominal rate is stored as configured and never recomputed.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct RateComponents {
    pub cost_of_funds: Option<Rate>,
    pub operating_cost: Option<Rate>,
    pub risk_percentage: Option<Rate>,
    pub profit_margin: Option<Rate>,
    pub nominal_interest_rate: Option<Rate>,
}

/// A loan product definition, read-only input to pricing and validation.
#[derive(Debug, PartialEq, Clone)]
pub struct LoanTypeConfig {
    pub id: u32,
    pub name: String,
    pub code: String,
    pub category: LoanCategory,
    pub currency: String,
    pub rates: RateComponents,
    pub application_fee: ApplicationFee,
    pub disbursement_fee: DisbursementFee,
    pub management_fee_rate: Option<Rate>,
    pub risk_premium_fee_rate: Option<Rate>,
    /// `Some(rate)` when VAT applies to fee lines.
    pub vat: Option<Rate>,
    pub min_amount: Option<Money>,
    pub max_amount: Option<Money>,
    pub term: TermRule,
    /// `None` means any frequency is accepted.
    pub allowed_frequencies: Option<Vec<String>>,
    pub collateral: Option<CollateralRequirement>,
}

impl LoanTypeConfig {
    /// A product with no fees and no constraints.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        code: impl Into<String>,
        category: LoanCategory,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            category,
            currency: currency.into(),
            rates: RateComponents::default(),
            application_fee: ApplicationFee::Unset,
            disbursement_fee: DisbursementFee::Unset,
            management_fee_rate: None,
            risk_premium_fee_rate: None,
            vat: None,
            min_amount: None,
            max_amount: None,
            term: TermRule::default(),
            allowed_frequencies: None,
            collateral: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationFeeType {
    Percentage,
    FixedAmount,
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum DisbursementFeeType {
    Percentage,
    FixedAmount,
    Tiered,
}

/// The flat, column-per-field shape in which loan types are persisted.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Default)]
#[serde(default)]
pub struct LoanTypeRecord {
    pub id: u32,
    pub name: String,
    pub code: String,
    pub category: LoanCategory,
    pub currency: String,

    pub cost_of_funds: Option<Rate>,
    pub operating_cost: Option<Rate>,
    pub risk_percentage: Option<Rate>,
    pub profit_margin: Option<Rate>,
    pub nominal_interest_rate: Option<Rate>,

    pub application_fee_type: Option<ApplicationFeeType>,
    pub application_fee_rate: Option<Rate>,
    pub application_fee_fixed: Option<Money>,

    pub disbursement_fee_type: Option<DisbursementFeeType>,
    pub disbursement_fee_rate: Option<Rate>,
    pub disbursement_fee_fixed: Option<Money>,
    pub disbursement_fee_tiers: Option<Vec<FeeTier>>,

    pub management_fee_rate: Option<Rate>,
    pub risk_premium_fee_rate: Option<Rate>,

    pub vat_applicable: bool,
    pub vat_rate: Option<Rate>,

    pub min_amount: Option<Money>,
    pub max_amount: Option<Money>,
    pub min_term_days: Option<u32>,
    pub max_term_days: Option<u32>,
    pub min_term_months: Option<u32>,
    pub max_term_months: Option<u32>,
    pub fixed_term_days: Option<u32>,
    pub allowed_frequencies: Option<Vec<String>>,
    pub requires_collateral: bool,
    pub min_collateral_ratio: Option<Rate>,
}

impl From<LoanTypeRecord> for LoanTypeConfig {
    fn from(record: LoanTypeRecord) -> Self {
        let application_fee = match record.application_fee_type {
            Some(ApplicationFeeType::Percentage) => record
                .application_fee_rate
                .map_or(ApplicationFee::Unset, ApplicationFee::Percentage),
            Some(ApplicationFeeType::FixedAmount) => record
                .application_fee_fixed
                .map_or(ApplicationFee::Unset, ApplicationFee::Fixed),
            None => ApplicationFee::Unset,
        };

        let disbursement_fee = match record.disbursement_fee_type {
            Some(DisbursementFeeType::Percentage) => record
                .disbursement_fee_rate
                .map_or(DisbursementFee::Unset, DisbursementFee::Percentage),
            Some(DisbursementFeeType::FixedAmount) => record
                .disbursement_fee_fixed
                .map_or(DisbursementFee::Unset, DisbursementFee::Fixed),
            Some(DisbursementFeeType::Tiered) => record
                .disbursement_fee_tiers
                .map_or(DisbursementFee::Unset, DisbursementFee::Tiered),
            None => DisbursementFee::Unset,
        };

        // A zero-day fixed term is treated as "no fixed term".
        let term = match record.fixed_term_days {
            Some(days) if days > 0 => TermRule::Fixed { days },
            _ => TermRule::Range {
                min_days: record.min_term_days,
                max_days: record.max_term_days,
                min_months: record.min_term_months,
                max_months: record.max_term_months,
            },
        };

        let collateral = match (record.requires_collateral, record.min_collateral_ratio) {
            (true, Some(min_ratio)) => Some(CollateralRequirement { min_ratio }),
            _ => None,
        };

        Self {
            id: record.id,
            name: record.name,
            code: record.code,
            category: record.category,
            currency: record.currency,
            rates: RateComponents {
                cost_of_funds: record.cost_of_funds,
                operating_cost: record.operating_cost,
                risk_percentage: record.risk_percentage,
                profit_margin: record.profit_margin,
                nominal_interest_rate: record.nominal_interest_rate,
            },
            application_fee,
            disbursement_fee,
            management_fee_rate: record.management_fee_rate,
            risk_premium_fee_rate: record.risk_premium_fee_rate,
            vat: record
                .vat_applicable
                .then(|| record.vat_rate.unwrap_or(Rate::ZERO)),
            min_amount: record.min_amount,
            max_amount: record.max_amount,
            term,
            allowed_frequencies: record
                .allowed_frequencies
                .filter(|frequencies| !frequencies.is_empty()),
            collateral,
        }
    }
}
