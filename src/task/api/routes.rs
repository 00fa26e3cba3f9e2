//! HTTP routes for the task resource.

use super::envelope::{self, ApiResponse};
use crate::task::{
    domain::Task,
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskService, UpdateTaskRequest},
};
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderValue, Method, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tracing::warn;

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (self.kind.http_status(), Json(self.envelope)).into_response()
    }
}

/// Builds the task routes, mounted under `/api/task`.
pub fn router<R>(service: TaskService<R>) -> Router
where
    R: TaskRepository + 'static,
{
    let task_routes = Router::new()
        .route("/create-task", post(create_task::<R>))
        .route("/get-all-task", get(list_tasks::<R>))
        .route("/show-task/{id}", get(show_task::<R>))
        .route("/update-task/{id}", put(update_task::<R>))
        .route("/delete-task/{id}", delete(delete_task::<R>))
        .with_state(service);

    Router::new().nest("/api/task", task_routes)
}

/// Builds a CORS layer admitting `allowed_origins` with credentials.
///
/// Origins that are not valid header values are skipped with a warning.
#[must_use]
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|err| warn!(%origin, error = %err, "ignoring invalid CORS origin"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Builds the complete application: task routes wrapped in CORS.
pub fn app<R>(service: TaskService<R>, allowed_origins: &[String]) -> Router
where
    R: TaskRepository + 'static,
{
    router(service).layer(cors_layer(allowed_origins))
}

async fn create_task<R>(
    State(service): State<TaskService<R>>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> ApiResponse<Task>
where
    R: TaskRepository + 'static,
{
    match payload {
        Ok(Json(request)) => envelope::created(service.create(request).await),
        Err(rejection) => reject_body(&rejection),
    }
}

async fn list_tasks<R>(
    State(service): State<TaskService<R>>,
) -> ApiResponse<Vec<Task>>
where
    R: TaskRepository + 'static,
{
    envelope::listed(service.list().await)
}

async fn show_task<R>(
    State(service): State<TaskService<R>>,
    Path(id): Path<String>,
) -> ApiResponse<Task>
where
    R: TaskRepository + 'static,
{
    envelope::shown(service.show(&id).await)
}

async fn update_task<R>(
    State(service): State<TaskService<R>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> ApiResponse<Task>
where
    R: TaskRepository + 'static,
{
    match payload {
        Ok(Json(request)) => envelope::updated(service.update(&id, request).await),
        Err(rejection) => reject_body(&rejection),
    }
}

async fn delete_task<R>(
    State(service): State<TaskService<R>>,
    Path(id): Path<String>,
) -> ApiResponse<()>
where
    R: TaskRepository + 'static,
{
    envelope::deleted(service.delete(&id).await)
}

fn reject_body<T>(rejection: &JsonRejection) -> ApiResponse<T> {
    let detail = rejection.body_text();
    warn!(status = %rejection.status(), %detail, "rejected undecodable task body");
    envelope::rejected(&detail)
}
