//! In-memory store.
//!
//! Intended for tests/dev. Not optimized for performance, and deliberately
//! free of uniqueness constraints: like the real backend, it will happily
//! hold two records with the same id, which is exactly what the eligibility
//! rules guard against.

use std::sync::RwLock;

use async_trait::async_trait;

use caseflow_cases::{CaseRecord, InteractionRecord, TransactionRecord, TransactionTypeRecord};
use caseflow_core::CaseId;

use crate::store::{
    CaseFilter, EntityStore, InteractionFilter, StoreError, TransactionFilter,
    TransactionTypeFilter,
};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    cases: RwLock<Vec<CaseRecord>>,
    interactions: RwLock<Vec<InteractionRecord>>,
    transactions: RwLock<Vec<TransactionRecord>>,
    transaction_types: RwLock<Vec<TransactionTypeRecord>>,
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a case together with its interactions and their transactions.
    ///
    /// Cascade is an explicit rule here: there is no schema around to imply
    /// it, and the core itself never deletes.
    pub fn remove_case_cascade(&self, id: CaseId) -> Result<(), StoreError> {
        let mut cases = self.cases.write().map_err(|_| poisoned())?;
        let mut interactions = self.interactions.write().map_err(|_| poisoned())?;
        let mut transactions = self.transactions.write().map_err(|_| poisoned())?;

        cases.retain(|case| case.id != id);
        interactions.retain(|interaction| interaction.case_id != Some(id));
        transactions.retain(|transaction| transaction.case_id != Some(id));
        Ok(())
    }
}

#[async_trait]
impl EntityStore<CaseRecord, CaseFilter> for InMemoryStore {
    async fn find(&self, filter: CaseFilter) -> Result<Vec<CaseRecord>, StoreError> {
        let cases = self.cases.read().map_err(|_| poisoned())?;
        Ok(cases.iter().filter(|c| filter.matches(c)).cloned().collect())
    }

    async fn add(&self, entity: CaseRecord) -> Result<(), StoreError> {
        self.cases.write().map_err(|_| poisoned())?.push(entity);
        Ok(())
    }
}

#[async_trait]
impl EntityStore<InteractionRecord, InteractionFilter> for InMemoryStore {
    async fn find(&self, filter: InteractionFilter) -> Result<Vec<InteractionRecord>, StoreError> {
        let interactions = self.interactions.read().map_err(|_| poisoned())?;
        Ok(interactions
            .iter()
            .filter(|i| filter.matches(i))
            .cloned()
            .collect())
    }

    async fn add(&self, entity: InteractionRecord) -> Result<(), StoreError> {
        self.interactions
            .write()
            .map_err(|_| poisoned())?
            .push(entity);
        Ok(())
    }
}

#[async_trait]
impl EntityStore<TransactionRecord, TransactionFilter> for InMemoryStore {
    async fn find(&self, filter: TransactionFilter) -> Result<Vec<TransactionRecord>, StoreError> {
        let transactions = self.transactions.read().map_err(|_| poisoned())?;
        Ok(transactions
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect())
    }

    async fn add(&self, entity: TransactionRecord) -> Result<(), StoreError> {
        self.transactions
            .write()
            .map_err(|_| poisoned())?
            .push(entity);
        Ok(())
    }
}

#[async_trait]
impl EntityStore<TransactionTypeRecord, TransactionTypeFilter> for InMemoryStore {
    async fn find(
        &self,
        filter: TransactionTypeFilter,
    ) -> Result<Vec<TransactionTypeRecord>, StoreError> {
        let transaction_types = self.transaction_types.read().map_err(|_| poisoned())?;
        Ok(transaction_types
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect())
    }

    async fn add(&self, entity: TransactionTypeRecord) -> Result<(), StoreError> {
        self.transaction_types
            .write()
            .map_err(|_| poisoned())?
            .push(entity);
        Ok(())
    }
}
