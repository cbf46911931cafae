//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::DomainError;

/// Identifier of a case (top-level unit of customer service work).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(Ulid);

/// Identifier of an interaction (a recorded customer contact within a case).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionId(Ulid);

/// Identifier of a transaction (a unit of work within an interaction).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Ulid);

/// Identifier of a transaction type (lookup/reference classification).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionTypeId(Ulid);

macro_rules! impl_ulid_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a new identifier.
            ///
            /// ULIDs are time-ordered and lexicographically sortable. Prefer
            /// passing IDs explicitly in tests for determinism.
            pub fn new() -> Self {
                Self(Ulid::new())
            }

            pub fn from_ulid(ulid: Ulid) -> Self {
                Self(ulid)
            }

            pub fn as_ulid(&self) -> &Ulid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Ulid> for $t {
            fn from(value: Ulid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for Ulid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let ulid = Ulid::from_string(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(ulid))
            }
        }
    };
}

impl_ulid_newtype!(CaseId, "CaseId");
impl_ulid_newtype!(InteractionId, "InteractionId");
impl_ulid_newtype!(TransactionId, "TransactionId");
impl_ulid_newtype!(TransactionTypeId, "TransactionTypeId");
