//! Transaction: a unit of work performed within an interaction, typed by a
//! transaction type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use caseflow_core::{CaseId, InteractionId, TransactionId, TransactionTypeId};

use crate::case::{CaseDto, CaseRecord};
use crate::interaction::{InteractionDto, InteractionRecord};
use crate::transaction_type::{TransactionTypeDto, TransactionTypeRecord};

/// Persistence shape of a transaction. Foreign keys reference the case,
/// interaction and transaction type; each related object may additionally be
/// hydrated. Interaction linkage is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: TransactionId,
    pub created_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub status: String,
    pub reference_number: String,
    pub case_id: Option<CaseId>,
    pub case: Option<Box<CaseRecord>>,
    pub interaction_id: Option<InteractionId>,
    pub interaction: Option<Box<InteractionRecord>>,
    pub transaction_type_id: Option<TransactionTypeId>,
    pub transaction_type: Option<TransactionTypeRecord>,
    pub is_immediate: bool,
    pub is_fulfilled_externally: bool,
    pub external_system: Option<String>,
    pub external_system_id: Option<String>,
    pub external_system_status: Option<String>,
    pub external_system_parent_id: Option<String>,
    pub parent_reference_number: Option<String>,
    pub received_details: String,
    pub processed_details: Option<String>,
}

/// Transport shape of a transaction: nested objects only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDto {
    pub id: TransactionId,
    pub created_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub status: String,
    pub reference_number: String,
    pub case: Option<Box<CaseDto>>,
    pub interaction: Option<Box<InteractionDto>>,
    pub transaction_type: Option<TransactionTypeDto>,
    pub is_immediate: bool,
    pub is_fulfilled_externally: bool,
    pub external_system: Option<String>,
    pub external_system_id: Option<String>,
    pub external_system_status: Option<String>,
    pub external_system_parent_id: Option<String>,
    pub parent_reference_number: Option<String>,
    pub received_details: String,
    pub processed_details: Option<String>,
}

impl TransactionDto {
    /// Map the persistence shape to the transport shape, recursing into any
    /// hydrated related object.
    pub fn from_record(record: &TransactionRecord) -> Self {
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
            interaction: record
                .interaction
                .as_deref()
                .map(|interaction| Box::new(InteractionDto::from_record(interaction))),
            transaction_type: record
                .transaction_type
                .as_ref()
                .map(TransactionTypeDto::from_record),
            is_immediate: record.is_immediate,
            is_fulfilled_externally: record.is_fulfilled_externally,
            external_system: record.external_system.clone(),
            external_system_id: record.external_system_id.clone(),
            external_system_status: record.external_system_status.clone(),
            external_system_parent_id: record.external_system_parent_id.clone(),
            parent_reference_number: record.parent_reference_number.clone(),
            received_details: record.received_details.clone(),
            processed_details: record.processed_details.clone(),
        }
    }

    /// Map back to the persistence shape. Each present nested object
    /// populates its foreign key and navigation property; absent ones leave
    /// both unset.
    pub fn into_record(self) -> TransactionRecord {
        let case_id = self.case.as_ref().map(|case| case.id);
        let interaction_id = self.interaction.as_ref().map(|interaction| interaction.id);
        let transaction_type_id = self.transaction_type.as_ref().map(|tt| tt.id);
        TransactionRecord {
            id: self.id,
            created_date: self.created_date,
            update_date: self.update_date,
            status: self.status,
            reference_number: self.reference_number,
            case_id,
            case: self.case.map(|case| Box::new(case.into_record())),
            interaction_id,
            interaction: self
                .interaction
                .map(|interaction| Box::new(interaction.into_record())),
            transaction_type_id,
            transaction_type: self.transaction_type.map(TransactionTypeDto::into_record),
            is_immediate: self.is_immediate,
            is_fulfilled_externally: self.is_fulfilled_externally,
            external_system: self.external_system,
            external_system_id: self.external_system_id,
            external_system_status: self.external_system_status,
            external_system_parent_id: self.external_system_parent_id,
            parent_reference_number: self.parent_reference_number,
            received_details: self.received_details,
            processed_details: self.processed_details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Channel;
    use crate::status::{CaseStatus, TransactionStatus};

    fn parent_case() -> CaseDto {
        CaseDto {
            id: CaseId::new(),
            created_date: Utc::now(),
            update_date: None,
            status: CaseStatus::InProgress.label().to_string(),
            reference_number: "CSC250803777YZABCD".to_string(),
            channel: Channel::Connect,
            identification_number: "ID-3003".to_string(),
            interactions: Vec::new(),
        }
    }

    fn transaction_type() -> TransactionTypeDto {
        TransactionTypeDto {
            id: TransactionTypeId::new(),
            created_date: Utc::now(),
            update_date: None,
            name: "Non-Policy".to_string(),
            description: "Work unrelated to a policy".to_string(),
            requires_approval: false,
        }
    }

    fn sample_dto() -> TransactionDto {
        TransactionDto {
            id: TransactionId::new(),
            created_date: Utc::now(),
            update_date: None,
            status: TransactionStatus::Received.label().to_string(),
            reference_number: "CSC250803888EFGHIJ".to_string(),
            case: Some(Box::new(parent_case())),
            interaction: None,
            transaction_type: Some(transaction_type()),
            is_immediate: true,
            is_fulfilled_externally: false,
            external_system: None,
            external_system_id: None,
            external_system_status: None,
            external_system_parent_id: None,
            parent_reference_number: None,
            received_details: "{\"channel\":\"ivr\"}".to_string(),
            processed_details: None,
        }
    }

    #[test]
    fn nested_objects_populate_their_foreign_keys() {
        let dto = sample_dto();
        let case_id = dto.case.as_ref().map(|c| c.id);
        let type_id = dto.transaction_type.as_ref().map(|t| t.id);

        let record = dto.into_record();
        assert_eq!(record.case_id, case_id);
        assert_eq!(record.transaction_type_id, type_id);
        assert_eq!(record.interaction_id, None);
        assert!(record.interaction.is_none());
    }

    #[test]
    fn fully_populated_transaction_round_trips_exactly() {
        let dto = sample_dto();
        let back = TransactionDto::from_record(&dto.clone().into_record());
        assert_eq!(back, dto);
    }
}
