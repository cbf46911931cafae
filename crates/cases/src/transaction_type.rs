//! Transaction types: the lookup/reference classification for transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use caseflow_core::TransactionTypeId;

/// Persistence shape of a transaction type (e.g. "POCR", "Policy",
/// "Non-Policy"). A pure lookup table: no reference number, no status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionTypeRecord {
    pub id: TransactionTypeId,
    pub created_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub requires_approval: bool,
}

/// Transport shape of a transaction type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionTypeDto {
    pub id: TransactionTypeId,
    pub created_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub requires_approval: bool,
}

impl TransactionTypeDto {
    pub fn from_record(record: &TransactionTypeRecord) -> Self {
        Self {
            id: record.id,
            created_date: record.created_date,
            update_date: record.update_date,
            name: record.name.clone(),
            description: record.description.clone(),
            requires_approval: record.requires_approval,
        }
    }

    pub fn into_record(self) -> TransactionTypeRecord {
        TransactionTypeRecord {
            id: self.id,
            created_date: self.created_date,
            update_date: self.update_date,
            name: self.name,
            description: self.description,
            requires_approval: self.requires_approval,
        }
    }
}
