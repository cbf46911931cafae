//! Case: top-level unit of customer service work.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use caseflow_core::CaseId;

use crate::channel::Channel;
use crate::interaction::{InteractionDto, InteractionRecord};

/// Persistence shape of a case: scalar columns plus an optionally hydrated
/// navigation collection. A case owns its interactions; removing a case
/// removes them too (the store's cascade rule).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: CaseId,
    pub created_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub status: String,
    pub reference_number: String,
    pub channel: Channel,
    pub identification_number: String,
    pub interactions: Option<Vec<InteractionRecord>>,
}

/// Transport shape of a case: nested objects only, collections never absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDto {
    pub id: CaseId,
    pub created_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub status: String,
    pub reference_number: String,
    pub channel: Channel,
    pub identification_number: String,
    pub interactions: Vec<InteractionDto>,
}

impl CaseDto {
    /// Map the persistence shape to the transport shape. An absent
    /// interaction collection becomes an empty vector, never null.
    pub fn from_record(record: &CaseRecord) -> Self {
        Self {
            id: record.id,
            created_date: record.created_date,
            update_date: record.update_date,
            status: record.status.clone(),
            reference_number: record.reference_number.clone(),
            channel: record.channel,
            identification_number: record.identification_number.clone(),
            interactions: record
                .interactions
                .as_deref()
                .map(|items| items.iter().map(InteractionDto::from_record).collect())
                .unwrap_or_default(),
        }
    }

    /// Map back to the persistence shape, carrying present interactions
    /// through as a hydrated collection.
    pub fn into_record(self) -> CaseRecord {
        let interactions = if self.interactions.is_empty() {
            None
        } else {
            Some(
                self.interactions
                    .into_iter()
                    .map(InteractionDto::into_record)
                    .collect(),
            )
        };
        CaseRecord {
            id: self.id,
            created_date: self.created_date,
            update_date: self.update_date,
            status: self.status,
            reference_number: self.reference_number,
            channel: self.channel,
            identification_number: self.identification_number,
            interactions,
        }
    }
}
