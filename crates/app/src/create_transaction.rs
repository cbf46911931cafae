//! Create-transaction use case.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use caseflow_cases::{
    reference, BusinessSegment, CaseDto, CaseRecord, InteractionDto, InteractionRecord,
    TransactionDto, TransactionRecord, TransactionStatus, TransactionTypeDto,
    TransactionTypeRecord,
};
use caseflow_core::outcome::Outcome;
use caseflow_core::{CaseId, InteractionId, TransactionId, TransactionTypeId};

use crate::eligibility;
use crate::store::{
    CaseFilter, EntityStore, InteractionFilter, StoreError, TransactionFilter,
    TransactionTypeFilter,
};

/// Command: record a unit of work within a case, optionally linked to an
/// interaction and classified by a transaction type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTransaction {
    pub case_id: CaseId,
    pub interaction_id: Option<InteractionId>,
    pub transaction_type_id: Option<TransactionTypeId>,
    pub is_immediate: bool,
    pub is_fulfilled_externally: bool,
    pub received_details: String,
}

/// Identity of a freshly created transaction, with its parents for
/// cross-referencing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionCreated {
    pub id: TransactionId,
    pub reference_number: String,
    pub case_id: CaseId,
    pub interaction_id: Option<InteractionId>,
}

pub struct CreateTransactionHandler {
    cases: Arc<dyn EntityStore<CaseRecord, CaseFilter>>,
    interactions: Arc<dyn EntityStore<InteractionRecord, InteractionFilter>>,
    transactions: Arc<dyn EntityStore<TransactionRecord, TransactionFilter>>,
    transaction_types: Arc<dyn EntityStore<TransactionTypeRecord, TransactionTypeFilter>>,
}

impl CreateTransactionHandler {
    pub fn new(
        cases: Arc<dyn EntityStore<CaseRecord, CaseFilter>>,
        interactions: Arc<dyn EntityStore<InteractionRecord, InteractionFilter>>,
        transactions: Arc<dyn EntityStore<TransactionRecord, TransactionFilter>>,
        transaction_types: Arc<dyn EntityStore<TransactionTypeRecord, TransactionTypeFilter>>,
    ) -> Self {
        Self {
            cases,
            interactions,
            transactions,
            transaction_types,
        }
    }

    /// Record a transaction. The case is a hard requirement; interaction and
    /// transaction-type linkage are checked only when supplied. All lookups
    /// run before the single write at the end.
    pub async fn handle(
        &self,
        command: CreateTransaction,
    ) -> Result<Outcome<Option<TransactionCreated>>, StoreError> {
        let mut outcome = Outcome::new(None);

        let matches = self.cases.find(CaseFilter::ById(command.case_id)).await?;
        let Some(case) =
            eligibility::resolve_unique(matches, &eligibility::CASE, command.case_id, &mut outcome)
        else {
            return Ok(outcome);
        };

        let interaction = match command.interaction_id {
            Some(interaction_id) => {
                let matches = self
                    .interactions
                    .find(InteractionFilter::ById(interaction_id))
                    .await?;
                let Some(interaction) = eligibility::resolve_unique(
                    matches,
                    &eligibility::INTERACTION,
                    interaction_id,
                    &mut outcome,
                ) else {
                    return Ok(outcome);
                };
                Some(interaction)
            }
            None => None,
        };

        let transaction_type = match command.transaction_type_id {
            Some(type_id) => {
                let matches = self
                    .transaction_types
                    .find(TransactionTypeFilter::ById(type_id))
                    .await?;
                let Some(transaction_type) = eligibility::resolve_unique(
                    matches,
                    &eligibility::TRANSACTION_TYPE,
                    type_id,
                    &mut outcome,
                ) else {
                    return Ok(outcome);
                };
                Some(transaction_type)
            }
            None => None,
        };

        let id = TransactionId::new();
        let reference_number = match reference::generate(
            &id.to_string(),
            case.channel,
            BusinessSegment::CustomerServicing,
        ) {
            Ok(reference_number) => reference_number,
            Err(err) => {
                outcome.add_error_message(err.to_string(), false);
                return Ok(outcome);
            }
        };

        let case_id = case.id;
        let interaction_id = interaction.as_ref().map(|i| i.id);
        let dto = TransactionDto {
            id,
            created_date: Utc::now(),
            update_date: None,
            status: TransactionStatus::Received.label().to_string(),
            reference_number: reference_number.clone(),
            case: Some(Box::new(CaseDto::from_record(&case))),
            interaction: interaction
                .as_ref()
                .map(|i| Box::new(InteractionDto::from_record(i))),
            transaction_type: transaction_type
                .as_ref()
                .map(TransactionTypeDto::from_record),
            is_immediate: command.is_immediate,
            is_fulfilled_externally: command.is_fulfilled_externally,
            external_system: None,
            external_system_id: None,
            external_system_status: None,
            external_system_parent_id: None,
            parent_reference_number: None,
            received_details: command.received_details,
            processed_details: None,
        };
        self.transactions.add(dto.into_record()).await?;

        tracing::info!(
            transaction_id = %id,
            case_id = %case_id,
            reference_number = %reference_number,
            "transaction created"
        );
        Ok(Outcome::new(Some(TransactionCreated {
            id,
            reference_number,
            case_id,
            interaction_id,
        })))
    }
}
