//! Dev smoke binary: wires the handlers against the in-memory store, walks a
//! case through the full hierarchy, and prints each outcome envelope.

use std::sync::Arc;

use caseflow_app::{
    run_guarded, CaseQueries, CreateCase, CreateCaseHandler, CreateInteraction,
    CreateInteractionHandler, CreateTransaction, CreateTransactionHandler, InMemoryStore,
    TransactionQueries,
};
use caseflow_cases::Channel;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    caseflow_observability::init();

    let store = Arc::new(InMemoryStore::new());

    let case = run_guarded(
        "create_case",
        CreateCaseHandler::new(store.clone()).handle(CreateCase {
            channel: Channel::PublicWeb,
            identification_number: "ID-1001".to_string(),
        }),
    )
    .await;
    println!("{}", serde_json::to_string_pretty(&case).unwrap());
    let case = case.into_payload().expect("case creation failed");

    let interaction = run_guarded(
        "create_interaction",
        CreateInteractionHandler::new(store.clone(), store.clone()).handle(CreateInteraction {
            case_id: case.id,
            notes: "customer asked for a statement".to_string(),
            is_primary_interaction: true,
            previous_interaction_id: None,
        }),
    )
    .await;
    println!("{}", serde_json::to_string_pretty(&interaction).unwrap());
    let interaction = interaction.into_payload().expect("interaction creation failed");

    let transaction = run_guarded(
        "create_transaction",
        CreateTransactionHandler::new(store.clone(), store.clone(), store.clone(), store.clone())
            .handle(CreateTransaction {
                case_id: case.id,
                interaction_id: Some(interaction.id),
                transaction_type_id: None,
                is_immediate: false,
                is_fulfilled_externally: false,
                received_details: "statement reprint".to_string(),
            }),
    )
    .await;
    println!("{}", serde_json::to_string_pretty(&transaction).unwrap());

    let cases = run_guarded(
        "find_cases",
        CaseQueries::new(store.clone()).by_identification_number("ID-1001"),
    )
    .await;
    println!("{}", serde_json::to_string_pretty(&cases).unwrap());

    let transactions = run_guarded(
        "find_transactions",
        TransactionQueries::new(store).by_case_id(case.id),
    )
    .await;
    println!("{}", serde_json::to_string_pretty(&transactions).unwrap());
}
