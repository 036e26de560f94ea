//! Handlers for the pack list resource

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::{
    DomainError, DomainResult, NewPackList, PackList, PackListSummary, ReplacePackList,
};
use crate::repository::Repository;
use crate::AppState;

/// Body rejections are reported as invalid input with the JSON error shape
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> DomainResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| DomainError::InvalidInput(rejection.body_text()))
}

/// GET /api/packing/
pub async fn list_summaries(
    State(state): State<AppState>,
) -> DomainResult<Json<Vec<PackListSummary>>> {
    Ok(Json(state.lists.summaries().await?))
}

/// GET /api/packing/:id
pub async fn get_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> DomainResult<Json<PackList>> {
    state
        .lists
        .find_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| DomainError::NotFound(format!("pack list {}", id)))
}

/// POST /api/packing
pub async fn create_list(
    State(state): State<AppState>,
    payload: Result<Json<NewPackList>, JsonRejection>,
) -> DomainResult<(StatusCode, Json<PackList>)> {
    let list = PackList::from_new(body(payload)?)?;
    let created = state.lists.create(&list).await?;
    tracing::info!(id = %created.id, name = %created.name, "pack list created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/packing/:id, full replace
pub async fn replace_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ReplacePackList>, JsonRejection>,
) -> DomainResult<StatusCode> {
    let list = PackList::from_replace(&id, body(payload)?)?;
    state.lists.update(&list).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/packing/:id
pub async fn delete_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> DomainResult<StatusCode> {
    state.lists.delete(&id).await?;
    tracing::info!(%id, "pack list deleted");
    Ok(StatusCode::NO_CONTENT)
}
