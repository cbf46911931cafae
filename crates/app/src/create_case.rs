//! Create-case use case.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use caseflow_cases::{reference, BusinessSegment, CaseDto, CaseRecord, CaseStatus, Channel};
use caseflow_core::outcome::Outcome;
use caseflow_core::CaseId;

use crate::store::{CaseFilter, EntityStore, StoreError};

/// Command: open a new case for a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCase {
    pub channel: Channel,
    pub identification_number: String,
}

/// Identity of a freshly created case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseCreated {
    pub id: CaseId,
    pub reference_number: String,
}

pub struct CreateCaseHandler {
    cases: Arc<dyn EntityStore<CaseRecord, CaseFilter>>,
}

impl CreateCaseHandler {
    pub fn new(cases: Arc<dyn EntityStore<CaseRecord, CaseFilter>>) -> Self {
        Self { cases }
    }

    /// Open a case: assign its id and reference number, stamp the initial
    /// status, and persist. The single write happens last, after all
    /// validation, so a cancelled call leaves no partial state behind.
    pub async fn handle(
        &self,
        command: CreateCase,
    ) -> Result<Outcome<Option<CaseCreated>>, StoreError> {
        let mut outcome = Outcome::new(None);

        let id = CaseId::new();
        let reference_number = match reference::generate(
            &id.to_string(),
            command.channel,
            BusinessSegment::CustomerServicing,
        ) {
            Ok(reference_number) => reference_number,
            Err(err) => {
                outcome.add_error_message(err.to_string(), false);
                return Ok(outcome);
            }
        };

        let dto = CaseDto {
            id,
            created_date: Utc::now(),
            update_date: None,
            status: CaseStatus::Initiated.label().to_string(),
            reference_number: reference_number.clone(),
            channel: command.channel,
            identification_number: command.identification_number,
            interactions: Vec::new(),
        };
        self.cases.add(dto.into_record()).await?;

        tracing::info!(case_id = %id, reference_number = %reference_number, "case created");
        Ok(Outcome::new(Some(CaseCreated {
            id,
            reference_number,
        })))
    }
}
