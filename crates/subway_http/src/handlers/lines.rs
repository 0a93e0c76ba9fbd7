//! `/line` and `/lines` handlers.
//!
//! # Invariants
//! - `POST /line` and `PUT /lines/{id}` both answer `201 Created` with a
//!   `Location: /lines/{id}` header; existing clients expect that status.
//! - `DELETE /lines/{id}` of an unknown id answers 404, not 204.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use log::info;
use std::time::Instant;
use subway_core::{LineId, LineRequest, LineResponse, LineUpdateRequest};

pub(crate) async fn create_line(
    State(state): State<AppState>,
    Json(request): Json<LineRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let started_at = Instant::now();
    let line = state
        .with_line_service(|service| service.save_line(&request))
        .map_err(|err| ApiError::from(err).logged("line_create", started_at))?;

    info!(
        "event=line_create module=http status=ok line_id={} duration_ms={}",
        line.id,
        started_at.elapsed().as_millis()
    );
    Ok(created(line))
}

pub(crate) async fn list_lines(
    State(state): State<AppState>,
) -> Result<Json<Vec<LineResponse>>, ApiError> {
    let started_at = Instant::now();
    let lines = state
        .with_line_service(|service| service.find_all_lines())
        .map_err(|err| ApiError::from(err).logged("line_list", started_at))?;

    info!(
        "event=line_list module=http status=ok count={} duration_ms={}",
        lines.len(),
        started_at.elapsed().as_millis()
    );
    Ok(Json(lines))
}

pub(crate) async fn show_line(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
) -> Result<Json<LineResponse>, ApiError> {
    let started_at = Instant::now();
    let line = state
        .with_line_service(|service| service.find_line(id))
        .map_err(|err| ApiError::from(err).logged("line_get", started_at))?;

    info!(
        "event=line_get module=http status=ok line_id={} duration_ms={}",
        id,
        started_at.elapsed().as_millis()
    );
    Ok(Json(line))
}

pub(crate) async fn update_line(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
    Json(request): Json<LineUpdateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let started_at = Instant::now();
    let line = state
        .with_line_service(|service| service.update_line(id, &request))
        .map_err(|err| ApiError::from(err).logged("line_update", started_at))?;

    info!(
        "event=line_update module=http status=ok line_id={} duration_ms={}",
        id,
        started_at.elapsed().as_millis()
    );
    Ok(created(line))
}

pub(crate) async fn delete_line(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
) -> Result<StatusCode, ApiError> {
    let started_at = Instant::now();
    state
        .with_line_service(|service| service.delete_line(id))
        .map_err(|err| ApiError::from(err).logged("line_delete", started_at))?;

    info!(
        "event=line_delete module=http status=ok line_id={} duration_ms={}",
        id,
        started_at.elapsed().as_millis()
    );
    Ok(StatusCode::NO_CONTENT)
}

fn created(line: LineResponse) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/lines/{}", line.id))],
        Json(line),
    )
}
