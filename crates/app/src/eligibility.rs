//! Pre-creation eligibility.
//!
//! Before a child record is created against a parent supplied only by id,
//! the parent lookup is classified three ways: not-found, unique, or
//! ambiguous. One parameterized rule serves every parent kind so the
//! wording of the case and interaction variants cannot drift apart. The
//! rule reads from the store and writes into the envelope; it never creates
//! or mutates entities.

use core::fmt::Display;

use caseflow_core::outcome::{CustomException, Outcome};

/// Message parameters for one parent kind.
pub struct ParentKind {
    pub singular: &'static str,
    pub plural: &'static str,
    pub id_field: &'static str,
}

pub const CASE: ParentKind = ParentKind {
    singular: "case",
    plural: "cases",
    id_field: "CaseId",
};

pub const INTERACTION: ParentKind = ParentKind {
    singular: "interaction",
    plural: "interactions",
    id_field: "InteractionId",
};

pub const TRANSACTION_TYPE: ParentKind = ParentKind {
    singular: "transaction type",
    plural: "transaction types",
    id_field: "TransactionTypeId",
};

/// Classify a parent lookup and report failures into `outcome`.
///
/// Zero matches adds a not-found message; more than one adds an ambiguity
/// message plus exactly one conflict marker, so a transport layer can pick a
/// distinct status. Only a unique match yields the parent reference.
pub fn resolve_unique<E, T>(
    mut matches: Vec<E>,
    kind: &ParentKind,
    id: impl Display,
    outcome: &mut Outcome<T>,
) -> Option<E> {
    match matches.len() {
        0 => {
            outcome.add_error_message(
                format!("No {} found for {}: {id}", kind.singular, kind.id_field),
                false,
            );
            None
        }
        1 => Some(matches.remove(0)),
        _ => {
            let message = format!("Multiple {} found for {}: {id}", kind.plural, kind.id_field);
            outcome.add_error_message(message.clone(), false);
            outcome.add_custom_exception(CustomException::conflict(message), false);
            None
        }
    }
}
