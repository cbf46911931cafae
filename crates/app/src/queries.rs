//! Read-only query handlers.
//!
//! Uniform policy for every query: a blank required parameter is rejected
//! with a validation failure and an empty result, without touching the
//! store. An empty match set from the store is itself a successful result;
//! "no rows" is never a query error, in contrast to the creation-time
//! eligibility checks.

use std::sync::Arc;

use caseflow_cases::{
    CaseDto, CaseRecord, InteractionDto, InteractionRecord, TransactionDto, TransactionRecord,
};
use caseflow_core::outcome::{Outcome, ValidationFailure};
use caseflow_core::{CaseId, InteractionId};

use crate::store::{CaseFilter, EntityStore, InteractionFilter, StoreError, TransactionFilter};

/// Reject a blank required parameter with a rendered validation failure.
fn reject_blank<T: Default>(field: &str, value: &str) -> Option<Outcome<T>> {
    if !value.trim().is_empty() {
        return None;
    }
    Some(Outcome::from_validation_failures(
        T::default(),
        vec![ValidationFailure {
            field: field.to_string(),
            message: "A value is required".to_string(),
            attempted_value: value.to_string(),
        }],
    ))
}

pub struct CaseQueries {
    cases: Arc<dyn EntityStore<CaseRecord, CaseFilter>>,
}

impl CaseQueries {
    pub fn new(cases: Arc<dyn EntityStore<CaseRecord, CaseFilter>>) -> Self {
        Self { cases }
    }

    pub async fn by_identification_number(
        &self,
        identification_number: &str,
    ) -> Result<Outcome<Vec<CaseDto>>, StoreError> {
        if let Some(outcome) = reject_blank("identification_number", identification_number) {
            return Ok(outcome);
        }
        let records = self
            .cases
            .find(CaseFilter::ByIdentificationNumber(
                identification_number.to_string(),
            ))
            .await?;
        Ok(Outcome::new(
            records.iter().map(CaseDto::from_record).collect(),
        ))
    }

    pub async fn by_reference_number(
        &self,
        reference_number: &str,
    ) -> Result<Outcome<Vec<CaseDto>>, StoreError> {
        if let Some(outcome) = reject_blank("reference_number", reference_number) {
            return Ok(outcome);
        }
        let records = self
            .cases
            .find(CaseFilter::ByReferenceNumber(reference_number.to_string()))
            .await?;
        Ok(Outcome::new(
            records.iter().map(CaseDto::from_record).collect(),
        ))
    }

    pub async fn by_status(&self, status: &str) -> Result<Outcome<Vec<CaseDto>>, StoreError> {
        if let Some(outcome) = reject_blank("status", status) {
            return Ok(outcome);
        }
        let records = self
            .cases
            .find(CaseFilter::ByStatus(status.to_string()))
            .await?;
        Ok(Outcome::new(
            records.iter().map(CaseDto::from_record).collect(),
        ))
    }
}

pub struct InteractionQueries {
    interactions: Arc<dyn EntityStore<InteractionRecord, InteractionFilter>>,
}

impl InteractionQueries {
    pub fn new(interactions: Arc<dyn EntityStore<InteractionRecord, InteractionFilter>>) -> Self {
        Self { interactions }
    }

    pub async fn by_case_id(
        &self,
        case_id: CaseId,
    ) -> Result<Outcome<Vec<InteractionDto>>, StoreError> {
        let records = self
            .interactions
            .find(InteractionFilter::ByCaseId(case_id))
            .await?;
        Ok(Outcome::new(
            records.iter().map(InteractionDto::from_record).collect(),
        ))
    }

    pub async fn by_reference_number(
        &self,
        reference_number: &str,
    ) -> Result<Outcome<Vec<InteractionDto>>, StoreError> {
        if let Some(outcome) = reject_blank("reference_number", reference_number) {
            return Ok(outcome);
        }
        let records = self
            .interactions
            .find(InteractionFilter::ByReferenceNumber(
                reference_number.to_string(),
            ))
            .await?;
        Ok(Outcome::new(
            records.iter().map(InteractionDto::from_record).collect(),
        ))
    }
}

pub struct TransactionQueries {
    transactions: Arc<dyn EntityStore<TransactionRecord, TransactionFilter>>,
}

impl TransactionQueries {
    pub fn new(transactions: Arc<dyn EntityStore<TransactionRecord, TransactionFilter>>) -> Self {
        Self { transactions }
    }

    pub async fn by_case_id(
        &self,
        case_id: CaseId,
    ) -> Result<Outcome<Vec<TransactionDto>>, StoreError> {
        let records = self
            .transactions
            .find(TransactionFilter::ByCaseId(case_id))
            .await?;
        Ok(Outcome::new(
            records.iter().map(TransactionDto::from_record).collect(),
        ))
    }

    pub async fn by_interaction_id(
        &self,
        interaction_id: InteractionId,
    ) -> Result<Outcome<Vec<TransactionDto>>, StoreError> {
        let records = self
            .transactions
            .find(TransactionFilter::ByInteractionId(interaction_id))
            .await?;
        Ok(Outcome::new(
            records.iter().map(TransactionDto::from_record).collect(),
        ))
    }

    pub async fn by_reference_number(
        &self,
        reference_number: &str,
    ) -> Result<Outcome<Vec<TransactionDto>>, StoreError> {
        if let Some(outcome) = reject_blank("reference_number", reference_number) {
            return Ok(outcome);
        }
        let records = self
            .transactions
            .find(TransactionFilter::ByReferenceNumber(
                reference_number.to_string(),
            ))
            .await?;
        Ok(Outcome::new(
            records.iter().map(TransactionDto::from_record).collect(),
        ))
    }

    pub async fn by_status(
        &self,
        status: &str,
    ) -> Result<Outcome<Vec<TransactionDto>>, StoreError> {
        if let Some(outcome) = reject_blank("status", status) {
            return Ok(outcome);
        }
        let records = self
            .transactions
            .find(TransactionFilter::ByStatus(status.to_string()))
            .await?;
        Ok(Outcome::new(
            records.iter().map(TransactionDto::from_record).collect(),
        ))
    }
}
