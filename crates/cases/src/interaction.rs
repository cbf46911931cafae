//! Interaction: a recorded customer contact/event within a case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use caseflow_core::{CaseId, InteractionId};

use crate::case::{CaseDto, CaseRecord};
use crate::transaction::{TransactionDto, TransactionRecord};

/// Persistence shape of an interaction.
///
/// `previous_interaction_id` is a soft backward reference to an earlier
/// interaction in the same case, not an ownership relation. At most one
/// interaction per case is primary by convention; the data layer does not
/// enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub id: InteractionId,
    pub created_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub status: String,
    pub reference_number: String,
    pub case_id: Option<CaseId>,
    pub case: Option<Box<CaseRecord>>,
    pub notes: String,
    pub is_primary_interaction: bool,
    pub previous_interaction_id: Option<InteractionId>,
    pub transactions: Option<Vec<TransactionRecord>>,
}

/// Transport shape of an interaction: nested objects only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionDto {
    pub id: InteractionId,
    pub created_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub status: String,
    pub reference_number: String,
    pub case: Option<Box<CaseDto>>,
    pub notes: String,
    pub is_primary_interaction: bool,
    pub previous_interaction_id: Option<InteractionId>,
    pub transactions: Vec<TransactionDto>,
}

impl InteractionDto {
    /// Map the persistence shape to the transport shape, recursing into a
    /// present parent case and present transactions.
    pub fn from_record(record: &InteractionRecord) -> Self {
        Self {
            id: record.id,
            created_date: record.created_date,
            update_date: record.update_date,
            status: record.status.clone(),
            reference_number: record.reference_number.clone(),
            case: record
                .case
                .as_deref()
                .map(|case| Box::new(CaseDto::from_record(case))),
            notes: record.notes.clone(),
            is_primary_interaction: record.is_primary_interaction,
            previous_interaction_id: record.previous_interaction_id,
            transactions: record
                .transactions
                .as_deref()
                .map(|items| items.iter().map(TransactionDto::from_record).collect())
                .unwrap_or_default(),
        }
    }

    /// Map back to the persistence shape. A present nested case populates
    /// both the foreign key and the navigation property; an absent one
    /// leaves both unset.
    pub fn into_record(self) -> InteractionRecord {
        let case_id = self.case.as_ref().map(|case| case.id);
        let transactions = if self.transactions.is_empty() {
            None
        } else {
            Some(
                self.transactions
                    .into_iter()
                    .map(TransactionDto::into_record)
                    .collect(),
            )
        };
        InteractionRecord {
            id: self.id,
            created_date: self.created_date,
            update_date: self.update_date,
            status: self.status,
            reference_number: self.reference_number,
            case_id,
            case: self.case.map(|case| Box::new(case.into_record())),
            notes: self.notes,
            is_primary_interaction: self.is_primary_interaction,
            previous_interaction_id: self.previous_interaction_id,
            transactions,
        }
    }
}
