use super::loan_type::LoanTypeConfig;
use crate::error::Result;
use async_trait::async_trait;

/// Source of loan product definitions, keyed by loan type id.
#[async_trait]
pub trait LoanTypeStore: Send + Sync {
    async fn store(&self, config: LoanTypeConfig) -> Result<()>;
    async fn get(&self, id: u32) -> Result<Option<LoanTypeConfig>>;
}

pub type LoanTypeStoreBox = Box<dyn LoanTypeStore>;
