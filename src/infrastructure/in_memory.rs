use crate::domain::loan_type::LoanTypeConfig;
use crate::domain::ports::LoanTypeStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory catalog of loan products.
///
/// Uses `Arc<RwLock<HashMap<u32, LoanTypeConfig>>>` so clones share one catalog.
#[derive(Default, Clone)]
pub struct InMemoryLoanTypeStore {
    loan_types: Arc<RwLock<HashMap<u32, LoanTypeConfig>>>,
}

impl InMemoryLoanTypeStore {
    /// Creates a new, empty in-memory loan type store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoanTypeStore for InMemoryLoanTypeStore {
    async fn store(&self, config: LoanTypeConfig) -> Result<()> {
        let mut loan_types = self.loan_types.write().await;
        loan_types.insert(config.id, config);
        Ok(())
    }

    async fn get(&self, id: u32) -> Result<Option<LoanTypeConfig>> {
        let loan_types = self.loan_types.read().await;
        Ok(loan_types.get(&id).cloned())
    }
}
