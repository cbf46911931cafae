//! Integration tests for the full create/query pipeline.
//!
//! Command → eligibility → mapping → store → envelope, end to end against
//! the in-memory store.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use caseflow_cases::{CaseStatus, Channel, InteractionStatus, TransactionStatus};
    use caseflow_core::outcome::ExceptionKind;
    use caseflow_core::CaseId;

    use crate::create_case::{CaseCreated, CreateCase, CreateCaseHandler};
    use crate::create_interaction::{CreateInteraction, CreateInteractionHandler};
    use crate::create_transaction::{CreateTransaction, CreateTransactionHandler};
    use crate::memory::InMemoryStore;
    use crate::queries::{CaseQueries, InteractionQueries, TransactionQueries};
    use crate::store::{CaseFilter, EntityStore, StoreError};

    fn store() -> Arc<InMemoryStore> {
        Arc::new(InMemoryStore::new())
    }

    async fn create_case(store: &Arc<InMemoryStore>, channel: Channel, ident: &str) -> CaseCreated {
        CreateCaseHandler::new(store.clone())
            .handle(CreateCase {
                channel,
                identification_number: ident.to_string(),
            })
            .await
            .unwrap()
            .into_payload()
            .unwrap()
    }

    #[tokio::test]
    async fn created_case_has_identity_reference_number_and_initiated_status() {
        let store = store();
        let created = create_case(&store, Channel::PublicWeb, "ID-1001").await;

        assert!(!created.id.to_string().is_empty());
        assert_eq!(created.reference_number.len(), 18);
        assert!(created.reference_number.starts_with("CSP"));
        let id_text = created.id.to_string();
        assert!(created.reference_number.ends_with(&id_text[id_text.len() - 6..]));

        let found = CaseQueries::new(store)
            .by_identification_number("ID-1001")
            .await
            .unwrap();
        assert!(found.success());
        assert_eq!(found.payload().len(), 1);
        assert_eq!(found.payload()[0].status, CaseStatus::Initiated.label());
    }

    #[tokio::test]
    async fn interaction_against_a_missing_case_is_rejected() {
        let store = store();
        let case_id = CaseId::new();

        let outcome = CreateInteractionHandler::new(store.clone(), store)
            .handle(CreateInteraction {
                case_id,
                notes: String::new(),
                is_primary_interaction: false,
                previous_interaction_id: None,
            })
            .await
            .unwrap();

        assert!(!outcome.success());
        assert_eq!(
            outcome.error_messages(),
            [format!("No case found for CaseId: {case_id}")]
        );
    }

    #[tokio::test]
    async fn interaction_against_an_ambiguous_case_is_a_conflict() {
        let store = store();
        let created = create_case(&store, Channel::Branch, "ID-2002").await;

        let duplicate = store
            .find(CaseFilter::ById(created.id))
            .await
            .unwrap()
            .remove(0);
        store.add(duplicate).await.unwrap();

        let outcome = CreateInteractionHandler::new(store.clone(), store)
            .handle(CreateInteraction {
                case_id: created.id,
                notes: String::new(),
                is_primary_interaction: false,
                previous_interaction_id: None,
            })
            .await
            .unwrap();

        assert!(!outcome.success());
        assert_eq!(
            outcome.error_messages(),
            [format!("Multiple cases found for CaseId: {}", created.id)]
        );
        let exceptions = outcome.custom_exceptions().unwrap();
        assert_eq!(exceptions.len(), 1);
        assert_eq!(exceptions[0].kind, ExceptionKind::Conflict);
    }

    #[tokio::test]
    async fn transaction_without_interaction_is_received_and_unlinked() {
        let store = store();
        let created = create_case(&store, Channel::Connect, "ID-3003").await;

        let handler = CreateTransactionHandler::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
        );
        let outcome = handler
            .handle(CreateTransaction {
                case_id: created.id,
                interaction_id: None,
                transaction_type_id: None,
                is_immediate: false,
                is_fulfilled_externally: false,
                received_details: "statement reprint".to_string(),
            })
            .await
            .unwrap();

        assert!(outcome.success());
        let transaction = outcome.payload().as_ref().unwrap().clone();
        assert_eq!(transaction.interaction_id, None);

        let found = TransactionQueries::new(store)
            .by_case_id(created.id)
            .await
            .unwrap();
        assert_eq!(found.payload().len(), 1);
        assert_eq!(found.payload()[0].status, TransactionStatus::Received.label());
        assert!(found.payload()[0].interaction.is_none());
    }

    #[tokio::test]
    async fn blank_identification_number_query_is_rejected_uniformly() {
        let outcome = CaseQueries::new(store())
            .by_identification_number("")
            .await
            .unwrap();

        assert!(!outcome.success());
        assert!(outcome.payload().is_empty());
        assert_eq!(
            outcome.error_messages(),
            ["A value is required on property 'identification_number' with value ()"]
        );
    }

    #[tokio::test]
    async fn hierarchy_is_navigable_through_queries() {
        let store = store();
        let case = create_case(&store, Channel::SecureWeb, "ID-4004").await;

        let interaction = CreateInteractionHandler::new(store.clone(), store.clone())
            .handle(CreateInteraction {
                case_id: case.id,
                notes: "secure message".to_string(),
                is_primary_interaction: true,
                previous_interaction_id: None,
            })
            .await
            .unwrap()
            .into_payload()
            .unwrap();

        let transaction = CreateTransactionHandler::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
        )
        .handle(CreateTransaction {
            case_id: case.id,
            interaction_id: Some(interaction.id),
            transaction_type_id: None,
            is_immediate: true,
            is_fulfilled_externally: false,
            received_details: "beneficiary update".to_string(),
        })
        .await
        .unwrap()
        .into_payload()
        .unwrap();

        let interactions = InteractionQueries::new(store.clone())
            .by_case_id(case.id)
            .await
            .unwrap();
        assert_eq!(interactions.payload().len(), 1);
        assert_eq!(
            interactions.payload()[0].status,
            InteractionStatus::Initiated.label()
        );

        let transactions = TransactionQueries::new(store)
            .by_interaction_id(interaction.id)
            .await
            .unwrap();
        assert_eq!(transactions.payload().len(), 1);
        assert_eq!(
            transactions.payload()[0].reference_number,
            transaction.reference_number
        );
    }

    #[tokio::test]
    async fn removing_a_case_cascades_to_its_children() {
        let store = store();
        let case = create_case(&store, Channel::Branch, "ID-5005").await;

        let interaction = CreateInteractionHandler::new(store.clone(), store.clone())
            .handle(CreateInteraction {
                case_id: case.id,
                notes: String::new(),
                is_primary_interaction: true,
                previous_interaction_id: None,
            })
            .await
            .unwrap()
            .into_payload()
            .unwrap();

        CreateTransactionHandler::new(store.clone(), store.clone(), store.clone(), store.clone())
            .handle(CreateTransaction {
                case_id: case.id,
                interaction_id: Some(interaction.id),
                transaction_type_id: None,
                is_immediate: false,
                is_fulfilled_externally: false,
                received_details: String::new(),
            })
            .await
            .unwrap();

        store.remove_case_cascade(case.id).unwrap();

        let interactions = InteractionQueries::new(store.clone())
            .by_case_id(case.id)
            .await
            .unwrap();
        assert!(interactions.payload().is_empty());

        let transactions = TransactionQueries::new(store.clone())
            .by_case_id(case.id)
            .await
            .unwrap();
        assert!(transactions.payload().is_empty());

        let cases = store.find(CaseFilter::ById(case.id)).await.unwrap();
        assert!(cases.is_empty());
    }

    /// A store that always fails, for exercising the fault boundary.
    struct UnavailableStore;

    #[async_trait::async_trait]
    impl<E, F> EntityStore<E, F> for UnavailableStore
    where
        E: Send + Sync + 'static,
        F: Send + Sync + 'static,
    {
        async fn find(&self, _filter: F) -> Result<Vec<E>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn add(&self, _entity: E) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn store_faults_surface_as_a_generic_failure_outcome() {
        let cases: Arc<dyn EntityStore<_, _>> = Arc::new(UnavailableStore);
        let handler = CreateCaseHandler::new(cases);

        let outcome = crate::boundary::run_guarded(
            "create_case",
            handler.handle(CreateCase {
                channel: Channel::PublicWeb,
                identification_number: "ID-6006".to_string(),
            }),
        )
        .await;

        assert!(!outcome.success());
        assert!(outcome.payload().is_none());
        assert_eq!(outcome.error_messages(), ["create_case failed unexpectedly"]);
    }
}
