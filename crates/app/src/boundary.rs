//! Outermost fault boundary.
//!
//! Business failures travel inside the outcome envelope; only infrastructure
//! faults arrive here as `Err`. This is the single place that catches them,
//! logs the full cause chain, and degrades to a generic failure outcome so
//! callers always receive an envelope.

use std::error::Error;
use std::future::Future;

use caseflow_core::outcome::Outcome;

use crate::store::StoreError;

/// Await a handler future; on an infrastructure fault, log it (every nested
/// cause individually) and return a generic failure outcome instead.
pub async fn run_guarded<T, F>(operation: &'static str, fut: F) -> Outcome<T>
where
    T: Default,
    F: Future<Output = Result<Outcome<T>, StoreError>>,
{
    match fut.await {
        Ok(outcome) => outcome,
        Err(err) => {
            log_error_chain(operation, &err);
            let mut outcome = Outcome::new(T::default());
            outcome.add_error_message(format!("{operation} failed unexpectedly"), false);
            outcome
        }
    }
}

fn log_error_chain(operation: &str, err: &dyn Error) {
    tracing::error!(operation, error = %err, "operation failed");
    let mut source = err.source();
    while let Some(cause) = source {
        tracing::error!(operation, cause = %cause, "caused by");
        source = cause.source();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_a_clean_outcome_through() {
        let outcome =
            run_guarded("create_case", async { Ok(Outcome::new(Some(1u8))) }).await;
        assert!(outcome.success());
        assert_eq!(outcome.payload(), &Some(1));
    }

    #[tokio::test]
    async fn passes_a_failed_outcome_through_untouched() {
        let outcome = run_guarded("create_case", async {
            let mut outcome: Outcome<Option<u8>> = Outcome::new(None);
            outcome.add_error_message("No case found for CaseId: x", false);
            Ok(outcome)
        })
        .await;
        assert!(!outcome.success());
        assert_eq!(outcome.error_messages(), ["No case found for CaseId: x"]);
    }

    #[tokio::test]
    async fn normalizes_a_store_fault_into_a_failure_outcome() {
        let outcome: Outcome<Option<u8>> = run_guarded("find_cases", async {
            Err(StoreError::Unavailable("connection refused".to_string()))
        })
        .await;
        assert!(!outcome.success());
        assert!(outcome.payload().is_none());
        assert_eq!(outcome.error_messages(), ["find_cases failed unexpectedly"]);
    }
}
