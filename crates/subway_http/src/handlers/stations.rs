//! `/stations` handlers.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use log::info;
use std::time::Instant;
use subway_core::{StationId, StationRequest, StationResponse};

pub(crate) async fn create_station(
    State(state): State<AppState>,
    Json(request): Json<StationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let started_at = Instant::now();
    let station = state
        .with_station_service(|service| service.save_station(&request))
        .map_err(|err| ApiError::from(err).logged("station_create", started_at))?;

    info!(
        "event=station_create module=http status=ok station_id={} duration_ms={}",
        station.id,
        started_at.elapsed().as_millis()
    );
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/stations/{}", station.id))],
        Json(station),
    ))
}

pub(crate) async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<Vec<StationResponse>>, ApiError> {
    let started_at = Instant::now();
    let stations = state
        .with_station_service(|service| service.find_all_stations())
        .map_err(|err| ApiError::from(err).logged("station_list", started_at))?;

    info!(
        "event=station_list module=http status=ok count={} duration_ms={}",
        stations.len(),
        started_at.elapsed().as_millis()
    );
    Ok(Json(stations))
}

pub(crate) async fn show_station(
    State(state): State<AppState>,
    Path(id): Path<StationId>,
) -> Result<Json<StationResponse>, ApiError> {
    let started_at = Instant::now();
    let station = state
        .with_station_service(|service| service.find_station(id))
        .map_err(|err| ApiError::from(err).logged("station_get", started_at))?;

    info!(
        "event=station_get module=http status=ok station_id={} duration_ms={}",
        id,
        started_at.elapsed().as_millis()
    );
    Ok(Json(station))
}

/// Lines that still reference the station are left as they are.
pub(crate) async fn delete_station(
    State(state): State<AppState>,
    Path(id): Path<StationId>,
) -> Result<StatusCode, ApiError> {
    let started_at = Instant::now();
    state
        .with_station_service(|service| service.delete_station(id))
        .map_err(|err| ApiError::from(err).logged("station_delete", started_at))?;

    info!(
        "event=station_delete module=http status=ok station_id={} duration_ms={}",
        id,
        started_at.elapsed().as_millis()
    );
    Ok(StatusCode::NO_CONTENT)
}
