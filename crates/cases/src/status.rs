//! Status lifecycles for the three entity levels.
//!
//! Statuses are free-form strings at the persistence layer; these closed
//! enumerations are where they come from. Each enum carries an explicit
//! value → label table and its inverse.

use serde::{Deserialize, Serialize};

/// Case status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStatus {
    Unknown,
    Initiated,
    Open,
    InProgress,
    Closed,
}

impl CaseStatus {
    pub fn label(self) -> &'static str {
        match self {
            CaseStatus::Unknown => "Unknown",
            CaseStatus::Initiated => "Initiated",
            CaseStatus::Open => "Open",
            CaseStatus::InProgress => "InProgress",
            CaseStatus::Closed => "Closed",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Unknown" => Some(CaseStatus::Unknown),
            "Initiated" => Some(CaseStatus::Initiated),
            "Open" => Some(CaseStatus::Open),
            "InProgress" => Some(CaseStatus::InProgress),
            "Closed" => Some(CaseStatus::Closed),
            _ => None,
        }
    }
}

/// Interaction status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionStatus {
    Unknown,
    Initiated,
    InProgress,
    Closed,
}

impl InteractionStatus {
    pub fn label(self) -> &'static str {
        match self {
            InteractionStatus::Unknown => "Unknown",
            InteractionStatus::Initiated => "Initiated",
            InteractionStatus::InProgress => "InProgress",
            InteractionStatus::Closed => "Closed",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Unknown" => Some(InteractionStatus::Unknown),
            "Initiated" => Some(InteractionStatus::Initiated),
            "InProgress" => Some(InteractionStatus::InProgress),
            "Closed" => Some(InteractionStatus::Closed),
            _ => None,
        }
    }
}

/// Transaction status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    Unknown,
    Aborted,
    Submitted,
    InProgress,
    Cancelled,
    Closed,
    Received,
}

impl TransactionStatus {
    pub fn label(self) -> &'static str {
        match self {
            TransactionStatus::Unknown => "Unknown",
            TransactionStatus::Aborted => "Aborted",
            TransactionStatus::Submitted => "Submitted",
            TransactionStatus::InProgress => "InProgress",
            TransactionStatus::Cancelled => "Cancelled",
            TransactionStatus::Closed => "Closed",
            TransactionStatus::Received => "Received",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Unknown" => Some(TransactionStatus::Unknown),
            "Aborted" => Some(TransactionStatus::Aborted),
            "Submitted" => Some(TransactionStatus::Submitted),
            "InProgress" => Some(TransactionStatus::InProgress),
            "Cancelled" => Some(TransactionStatus::Cancelled),
            "Closed" => Some(TransactionStatus::Closed),
            "Received" => Some(TransactionStatus::Received),
            _ => None,
        }
    }
}

impl core::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl core::fmt::Display for InteractionStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl core::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_status_tables_are_inverses() {
        for status in [
            CaseStatus::Unknown,
            CaseStatus::Initiated,
            CaseStatus::Open,
            CaseStatus::InProgress,
            CaseStatus::Closed,
        ] {
            assert_eq!(CaseStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(CaseStatus::from_label("Reopened"), None);
    }

    #[test]
    fn transaction_status_tables_are_inverses() {
        for status in [
            TransactionStatus::Unknown,
            TransactionStatus::Aborted,
            TransactionStatus::Submitted,
            TransactionStatus::InProgress,
            TransactionStatus::Cancelled,
            TransactionStatus::Closed,
            TransactionStatus::Received,
        ] {
            assert_eq!(TransactionStatus::from_label(status.label()), Some(status));
        }
    }
}
