//! `caseflow-app` — lifecycle orchestration.
//!
//! Command handlers create cases, interactions and transactions; query
//! handlers look them up. Each handler validates its input, resolves parent
//! entities through the eligibility rules, crosses the persistence boundary
//! via the entity↔DTO mapping, and reports through the outcome envelope.
//! Infrastructure faults are the only `Err`s, and they are normalized at one
//! place: the [`boundary`] module.

pub mod boundary;
pub mod create_case;
pub mod create_interaction;
pub mod create_transaction;
pub mod eligibility;
pub mod memory;
pub mod queries;
pub mod store;

mod integration_tests;

pub use boundary::run_guarded;
pub use create_case::{CaseCreated, CreateCase, CreateCaseHandler};
pub use create_interaction::{CreateInteraction, CreateInteractionHandler, InteractionCreated};
pub use create_transaction::{CreateTransaction, CreateTransactionHandler, TransactionCreated};
pub use memory::InMemoryStore;
pub use queries::{CaseQueries, InteractionQueries, TransactionQueries};
pub use store::{
    CaseFilter, EntityStore, InteractionFilter, StoreError, TransactionFilter,
    TransactionTypeFilter,
};
