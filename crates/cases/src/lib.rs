//! `caseflow-cases` — the case-servicing domain.
//!
//! Cases are tracked through a three-level hierarchy (case → interaction →
//! transaction). Each level carries a status, timestamps and a generated
//! reference number. This crate holds the entity records (persistence shape),
//! the transport DTOs with their bidirectional mapping, the channel/status
//! enumerations, and the reference-number generator.

pub mod case;
pub mod channel;
pub mod interaction;
pub mod reference;
pub mod status;
pub mod transaction;
pub mod transaction_type;

pub use case::{CaseDto, CaseRecord};
pub use channel::{BusinessSegment, Channel};
pub use interaction::{InteractionDto, InteractionRecord};
pub use status::{CaseStatus, InteractionStatus, TransactionStatus};
pub use transaction::{TransactionDto, TransactionRecord};
pub use transaction_type::{TransactionTypeDto, TransactionTypeRecord};
