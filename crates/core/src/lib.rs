//! `caseflow-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod outcome;

pub use error::{DomainError, DomainResult};
pub use id::{CaseId, InteractionId, TransactionId, TransactionTypeId};
pub use outcome::{CustomException, ExceptionKind, Outcome, ValidationFailure};
