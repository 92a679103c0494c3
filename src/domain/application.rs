use super::money::{Amount, Money};

/// Applicant-submitted parameters for one loan request.
#[derive(Debug, PartialEq, Clone)]
pub struct LoanApplication {
    pub loan_type_id: u32,
    pub amount: Amount,
    pub term_days: Option<u32>,
    pub term_months: Option<u32>,
    pub frequency: Option<String>,
    pub collateral_value: Option<Money>,
}

impl LoanApplication {
    pub fn new(loan_type_id: u32, amount: Amount) -> Self {
        Self {
            loan_type_id,
            amount,
            term_days: None,
            term_months: None,
            frequency: None,
            collateral_value: None,
        }
    }
}
