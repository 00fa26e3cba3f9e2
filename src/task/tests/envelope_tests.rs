//! Tests for mapping service outcomes to response envelopes.

use crate::task::{
    api::{
        OutcomeKind, TaskEnvelope,
        envelope::{
            CREATED_MESSAGE, DELETED_MESSAGE, MALFORMED_BODY_MESSAGE, NOT_FOUND_MESSAGE,
            UPDATED_MESSAGE, VALIDATION_FAILED_MESSAGE, created, deleted, listed, rejected, shown,
            updated,
        },
    },
    domain::{NewTask, Task, TaskId, TaskStatus},
    ports::TaskRepositoryError,
    services::TaskServiceError,
    validation::{FieldErrors, TaskField},
};
use axum::http::StatusCode;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

#[fixture]
fn task() -> Task {
    Task::create(
        TaskId::new(),
        NewTask::new("Buy milk", "2% milk from store"),
        &DefaultClock,
    )
}

fn title_errors() -> FieldErrors {
    std::iter::once((
        TaskField::Title,
        "Title must be at least 3 character long.".to_owned(),
    ))
    .collect()
}

/// Decodes an envelope for any payload type, as the client transport does.
fn parse_envelope<T: DeserializeOwned>(text: &str) -> TaskEnvelope<T> {
    serde_json::from_str(text).expect("envelope parses")
}

#[rstest]
#[case(OutcomeKind::Ok, StatusCode::OK)]
#[case(OutcomeKind::Created, StatusCode::CREATED)]
#[case(OutcomeKind::Invalid, StatusCode::BAD_REQUEST)]
#[case(OutcomeKind::NotFound, StatusCode::NOT_FOUND)]
#[case(OutcomeKind::Fault, StatusCode::INTERNAL_SERVER_ERROR)]
fn outcome_kinds_map_to_http_status(#[case] kind: OutcomeKind, #[case] expected: StatusCode) {
    assert_eq!(kind.http_status(), expected);
}

#[rstest]
fn created_carries_message_and_task(task: Task) {
    let response = created(Ok(task.clone()));

    assert_eq!(response.kind, OutcomeKind::Created);
    assert!(response.envelope.status);
    assert_eq!(response.envelope.message.as_deref(), Some(CREATED_MESSAGE));
    assert_eq!(response.envelope.task_data, Some(task));
    assert!(response.envelope.errors.is_none());
}

#[rstest]
fn update_and_delete_carry_their_messages(task: Task) {
    let update = updated(Ok(task));
    let delete = deleted(Ok(()));

    assert_eq!(update.kind, OutcomeKind::Ok);
    assert_eq!(update.envelope.message.as_deref(), Some(UPDATED_MESSAGE));
    assert_eq!(delete.kind, OutcomeKind::Ok);
    assert_eq!(delete.envelope.message.as_deref(), Some(DELETED_MESSAGE));
    assert!(delete.envelope.task_data.is_none());
}

#[rstest]
fn reads_have_no_message(task: Task) {
    let list = listed(Ok(vec![task.clone()]));
    let show = shown(Ok(task));

    assert!(list.envelope.message.is_none());
    assert_eq!(list.envelope.task_data.map(|tasks| tasks.len()), Some(1));
    assert!(show.envelope.message.is_none());
}

#[rstest]
fn validation_errors_become_invalid_envelopes() {
    let response = created(Err(TaskServiceError::Validation(title_errors())));

    assert_eq!(response.kind, OutcomeKind::Invalid);
    assert!(!response.envelope.status);
    assert_eq!(
        response.envelope.message.as_deref(),
        Some(VALIDATION_FAILED_MESSAGE)
    );
    assert_eq!(response.envelope.errors, Some(title_errors()));
    assert!(response.envelope.task_data.is_none());
}

#[rstest]
fn missing_tasks_become_not_found_envelopes() {
    let response = shown(Err(TaskServiceError::NotFound("abc".to_owned())));

    assert_eq!(response.kind, OutcomeKind::NotFound);
    assert_eq!(response.envelope.message.as_deref(), Some(NOT_FOUND_MESSAGE));
    assert!(response.envelope.errors.is_none());
}

#[rstest]
fn store_failures_become_fault_envelopes() {
    let failure =
        TaskRepositoryError::unavailable(std::io::Error::other("connection refused"));
    let response = listed(Err(TaskServiceError::Repository(failure)));

    assert_eq!(response.kind, OutcomeKind::Fault);
    assert!(!response.envelope.status);
    let message = response.envelope.message.expect("fault carries a message");
    assert!(message.contains("connection refused"));
}

#[rstest]
fn success_envelope_serializes_task_under_task_data(task: Task) {
    let body = serde_json::to_value(created(Ok(task.clone())).envelope)
        .expect("envelope serializes");

    assert_eq!(body["status"], Value::Bool(true));
    assert_eq!(body["message"], json!(CREATED_MESSAGE));
    assert_eq!(body["taskData"]["_id"], json!(task.id().to_string()));
    assert_eq!(body["taskData"]["status"], json!("Pending"));
    assert!(body["taskData"].get("createdAt").is_some());
    assert!(body["taskData"].get("updatedAt").is_some());
    assert!(body.get("errors").is_none());
}

#[rstest]
fn failure_envelope_serializes_field_errors() {
    let body = serde_json::to_value(TaskEnvelope::<Task>::failure(
        VALIDATION_FAILED_MESSAGE,
        Some(title_errors()),
    ))
    .expect("envelope serializes");

    assert_eq!(
        body,
        json!({
            "status": false,
            "message": VALIDATION_FAILED_MESSAGE,
            "errors": { "title": "Title must be at least 3 character long." },
        })
    );
}

#[rstest]
fn envelope_round_trips_through_json(task: Task) {
    let envelope = TaskEnvelope::success(Some(UPDATED_MESSAGE), Some(task));
    let text = serde_json::to_string(&envelope).expect("envelope serializes");
    let parsed: TaskEnvelope<Task> = serde_json::from_str(&text).expect("envelope parses");

    assert_eq!(parsed, envelope);
}

#[rstest]
fn failure_envelope_without_task_data_parses_for_any_payload() {
    let text = r#"{"status":false,"message":"Task not found."}"#;

    let single: TaskEnvelope<Task> = parse_envelope(text);
    let many: TaskEnvelope<Vec<Task>> = parse_envelope(text);
    let unit: TaskEnvelope<()> = parse_envelope(text);

    assert!(single.task_data.is_none());
    assert!(many.task_data.is_none());
    assert!(unit.task_data.is_none());
    assert_eq!(single.message.as_deref(), Some(NOT_FOUND_MESSAGE));
}

#[rstest]
fn undecodable_bodies_become_invalid_envelopes() {
    let response = rejected::<Task>("expected a string");

    assert_eq!(response.kind, OutcomeKind::Invalid);
    assert!(!response.envelope.status);
    assert_eq!(
        response.envelope.message.as_deref(),
        Some(format!("{MALFORMED_BODY_MESSAGE}: expected a string").as_str())
    );
    assert!(response.envelope.errors.is_none());
    assert!(response.envelope.task_data.is_none());
}

#[rstest]
fn refused_transitions_become_status_field_errors() {
    let response = updated(Err(TaskServiceError::InvalidTransition {
        from: TaskStatus::Completed,
        to: TaskStatus::Running,
    }));

    assert_eq!(response.kind, OutcomeKind::Invalid);
    assert_eq!(
        response.envelope.message.as_deref(),
        Some(VALIDATION_FAILED_MESSAGE)
    );
    let errors = response.envelope.errors.expect("transition carries field errors");
    assert_eq!(
        errors.get(TaskField::Status),
        Some("Cannot move a task from Completed to Running.")
    );
}
