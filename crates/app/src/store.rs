//! Persistence collaborator.
//!
//! The core talks to storage through a two-operation interface: find the
//! entities matching a typed filter, and add a new entity whose id the
//! caller already generated. Updates and removals are not exercised by this
//! core (deletion happens only via cascade, a store-side rule).

use async_trait::async_trait;
use thiserror::Error;

use caseflow_cases::{CaseRecord, InteractionRecord, TransactionRecord, TransactionTypeRecord};
use caseflow_core::{CaseId, InteractionId, TransactionId, TransactionTypeId};

/// Infrastructure fault raised by a store implementation.
///
/// These are the only errors allowed to cross a handler boundary as `Err`;
/// business failures travel in the outcome envelope instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Two-operation persistence collaborator, parameterized by entity and
/// filter. `find` returns every match: an empty vector, never an error,
/// when nothing matches.
#[async_trait]
pub trait EntityStore<E, F>: Send + Sync {
    async fn find(&self, filter: F) -> Result<Vec<E>, StoreError>;
    async fn add(&self, entity: E) -> Result<(), StoreError>;
}

/// Filter predicate for case lookups ("field equals value").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseFilter {
    ById(CaseId),
    ByIdentificationNumber(String),
    ByReferenceNumber(String),
    ByStatus(String),
}

impl CaseFilter {
    pub fn matches(&self, record: &CaseRecord) -> bool {
        match self {
            CaseFilter::ById(id) => record.id == *id,
            CaseFilter::ByIdentificationNumber(number) => {
                record.identification_number == *number
            }
            CaseFilter::ByReferenceNumber(number) => record.reference_number == *number,
            CaseFilter::ByStatus(status) => record.status == *status,
        }
    }
}

/// Filter predicate for interaction lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionFilter {
    ById(InteractionId),
    ByCaseId(CaseId),
    ByReferenceNumber(String),
}

impl InteractionFilter {
    pub fn matches(&self, record: &InteractionRecord) -> bool {
        match self {
            InteractionFilter::ById(id) => record.id == *id,
            InteractionFilter::ByCaseId(case_id) => record.case_id == Some(*case_id),
            InteractionFilter::ByReferenceNumber(number) => record.reference_number == *number,
        }
    }
}

/// Filter predicate for transaction lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionFilter {
    ById(TransactionId),
    ByCaseId(CaseId),
    ByInteractionId(InteractionId),
    ByReferenceNumber(String),
    ByStatus(String),
}

impl TransactionFilter {
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        match self {
            TransactionFilter::ById(id) => record.id == *id,
            TransactionFilter::ByCaseId(case_id) => record.case_id == Some(*case_id),
            TransactionFilter::ByInteractionId(interaction_id) => {
                record.interaction_id == Some(*interaction_id)
            }
            TransactionFilter::ByReferenceNumber(number) => record.reference_number == *number,
            TransactionFilter::ByStatus(status) => record.status == *status,
        }
    }
}

/// Filter predicate for transaction-type lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionTypeFilter {
    ById(TransactionTypeId),
    ByName(String),
}

impl TransactionTypeFilter {
    pub fn matches(&self, record: &TransactionTypeRecord) -> bool {
        match self {
            TransactionTypeFilter::ById(id) => record.id == *id,
            TransactionTypeFilter::ByName(name) => record.name == *name,
        }
    }
}
