//! Create-interaction use case.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use caseflow_cases::{
    reference, BusinessSegment, CaseDto, CaseRecord, InteractionDto, InteractionRecord,
    InteractionStatus,
};
use caseflow_core::outcome::Outcome;
use caseflow_core::{CaseId, InteractionId};

use crate::eligibility;
use crate::store::{CaseFilter, EntityStore, InteractionFilter, StoreError};

/// Command: record a customer contact within an existing case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInteraction {
    pub case_id: CaseId,
    pub notes: String,
    pub is_primary_interaction: bool,
    pub previous_interaction_id: Option<InteractionId>,
}

/// Identity of a freshly created interaction, with its case for
/// cross-referencing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionCreated {
    pub id: InteractionId,
    pub reference_number: String,
    pub case_id: CaseId,
}

pub struct CreateInteractionHandler {
    cases: Arc<dyn EntityStore<CaseRecord, CaseFilter>>,
    interactions: Arc<dyn EntityStore<InteractionRecord, InteractionFilter>>,
}

impl CreateInteractionHandler {
    pub fn new(
        cases: Arc<dyn EntityStore<CaseRecord, CaseFilter>>,
        interactions: Arc<dyn EntityStore<InteractionRecord, InteractionFilter>>,
    ) -> Self {
        Self {
            cases,
            interactions,
        }
    }

    /// Record an interaction: resolve the parent case, derive the reference
    /// number from the case's channel, stamp the initial status, persist.
    pub async fn handle(
        &self,
        command: CreateInteraction,
    ) -> Result<Outcome<Option<InteractionCreated>>, StoreError> {
        let mut outcome = Outcome::new(None);

        let matches = self.cases.find(CaseFilter::ById(command.case_id)).await?;
        let Some(parent) =
            eligibility::resolve_unique(matches, &eligibility::CASE, command.case_id, &mut outcome)
        else {
            return Ok(outcome);
        };

        let id = InteractionId::new();
        let reference_number = match reference::generate(
            &id.to_string(),
            parent.channel,
            BusinessSegment::CustomerServicing,
        ) {
            Ok(reference_number) => reference_number,
            Err(err) => {
                outcome.add_error_message(err.to_string(), false);
                return Ok(outcome);
            }
        };

        let case_id = parent.id;
        let dto = InteractionDto {
            id,
            created_date: Utc::now(),
            update_date: None,
            status: InteractionStatus::Initiated.label().to_string(),
            reference_number: reference_number.clone(),
            case: Some(Box::new(CaseDto::from_record(&parent))),
            notes: command.notes,
            is_primary_interaction: command.is_primary_interaction,
            previous_interaction_id: command.previous_interaction_id,
            transactions: Vec::new(),
        };
        self.interactions.add(dto.into_record()).await?;

        tracing::info!(
            interaction_id = %id,
            case_id = %case_id,
            reference_number = %reference_number,
            "interaction created"
        );
        Ok(Outcome::new(Some(InteractionCreated {
            id,
            reference_number,
            case_id,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_case::{CreateCase, CreateCaseHandler};
    use crate::memory::InMemoryStore;
    use caseflow_cases::Channel;
    use caseflow_core::outcome::ExceptionKind;

    fn setup() -> (Arc<InMemoryStore>, CreateInteractionHandler) {
        let store = Arc::new(InMemoryStore::new());
        (
            store.clone(),
            CreateInteractionHandler::new(store.clone(), store),
        )
    }

    async fn seeded_case(store: &Arc<InMemoryStore>) -> CaseId {
        let handler = CreateCaseHandler::new(store.clone());
        handler
            .handle(CreateCase {
                channel: Channel::Branch,
                identification_number: "ID-7007".to_string(),
            })
            .await
            .unwrap()
            .into_payload()
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn records_an_interaction_under_its_case() {
        let (store, handler) = setup();
        let case_id = seeded_case(&store).await;

        let outcome = handler
            .handle(CreateInteraction {
                case_id,
                notes: "customer called".to_string(),
                is_primary_interaction: true,
                previous_interaction_id: None,
            })
            .await
            .unwrap();

        assert!(outcome.success());
        let created = outcome.payload().as_ref().unwrap();
        assert_eq!(created.case_id, case_id);
        // Branch case, so the child inherits the branch prefix.
        assert!(created.reference_number.starts_with("CSB"));

        let stored = store
            .find(InteractionFilter::ByCaseId(case_id))
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].status, InteractionStatus::Initiated.label());
        assert!(stored[0].is_primary_interaction);
    }

    #[tokio::test]
    async fn missing_case_reports_not_found() {
        let (_store, handler) = setup();
        let case_id = CaseId::new();

        let outcome = handler
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
        assert!(outcome.custom_exceptions().is_none());
    }

    #[tokio::test]
    async fn ambiguous_case_reports_a_conflict() {
        let (store, handler) = setup();
        let case_id = seeded_case(&store).await;

        // A second record under the same id; the backend has no uniqueness
        // constraint to stop this.
        let duplicate = store
            .find(CaseFilter::ById(case_id))
            .await
            .unwrap()
            .remove(0);
        store.add(duplicate).await.unwrap();

        let outcome = handler
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
            [format!("Multiple cases found for CaseId: {case_id}")]
        );
        let exceptions = outcome.custom_exceptions().unwrap();
        assert_eq!(exceptions.len(), 1);
        assert_eq!(exceptions[0].kind, ExceptionKind::Conflict);
    }
}
