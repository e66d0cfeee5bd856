use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::potholes::dtos::{
    CreatePotholeDto, DeletePotholeResponseDto, FinalizeResponseDto, HistoryQuery,
    ListPotholesQuery, PotholeResponseDto, RouteLinkResponseDto,
};
use crate::features::potholes::handlers::PotholeState;
use crate::features::potholes::models::{Coordinate, CreatePothole, Pothole, PotholeStatus};
use crate::shared::date::today;
use crate::shared::types::{ApiResponse, Meta};

fn into_list(potholes: Vec<Pothole>) -> Json<ApiResponse<Vec<PotholeResponseDto>>> {
    let total = potholes.len() as i64;
    let dtos: Vec<PotholeResponseDto> = potholes.into_iter().map(Into::into).collect();
    Json(ApiResponse::success(Some(dtos), None, Some(Meta { total })))
}

/// List potholes by status
#[utoipa::path(
    get,
    path = "/api/potholes",
    params(ListPotholesQuery),
    responses(
        (status = 200, description = "Potholes in insertion order", body = ApiResponse<Vec<PotholeResponseDto>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "potholes"
)]
pub async fn list_potholes(
    State(state): State<PotholeState>,
    Query(query): Query<ListPotholesQuery>,
) -> Result<Json<ApiResponse<Vec<PotholeResponseDto>>>> {
    let status = query.status.unwrap_or(PotholeStatus::Pending);
    let potholes = state.pothole_service.list_by_status(status).await?;
    Ok(into_list(potholes))
}

/// Get pothole by ID
#[utoipa::path(
    get,
    path = "/api/potholes/{id}",
    params(
        ("id" = i64, Path, description = "Pothole ID")
    ),
    responses(
        (status = 200, description = "Pothole found", body = ApiResponse<PotholeResponseDto>),
        (status = 404, description = "Pothole not found")
    ),
    tag = "potholes"
)]
pub async fn get_pothole(
    State(state): State<PotholeState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<PotholeResponseDto>>> {
    let pothole = state.pothole_service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(pothole.into()), None, None)))
}

/// Register a pending pothole
#[utoipa::path(
    post,
    path = "/api/potholes",
    request_body = CreatePotholeDto,
    responses(
        (status = 201, description = "Pothole registered", body = ApiResponse<PotholeResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "potholes"
)]
pub async fn create_pothole(
    State(state): State<PotholeState>,
    AppJson(dto): AppJson<CreatePotholeDto>,
) -> Result<(StatusCode, Json<ApiResponse<PotholeResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let pothole = state
        .pothole_service
        .create(&CreatePothole {
            street: dto.street.trim().to_string(),
            severity: dto.severity,
            location: Coordinate::new(dto.latitude, dto.longitude),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(pothole.into()), None, None)),
    ))
}

/// Delete a pothole
///
/// Deleting an unknown ID succeeds and changes nothing.
#[utoipa::path(
    delete,
    path = "/api/potholes/{id}",
    params(
        ("id" = i64, Path, description = "Pothole ID")
    ),
    responses(
        (status = 200, description = "Pothole removed (or already absent)", body = ApiResponse<DeletePotholeResponseDto>)
    ),
    tag = "potholes"
)]
pub async fn delete_pothole(
    State(state): State<PotholeState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<DeletePotholeResponseDto>>> {
    let deleted = state.pothole_service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        Some(DeletePotholeResponseDto { id, deleted }),
        None,
        None,
    )))
}

/// Resolve every pending pothole with today's date
#[utoipa::path(
    post,
    path = "/api/potholes/finalize",
    responses(
        (status = 200, description = "Pending potholes resolved", body = ApiResponse<FinalizeResponseDto>)
    ),
    tag = "potholes"
)]
pub async fn finalize_potholes(
    State(state): State<PotholeState>,
) -> Result<Json<ApiResponse<FinalizeResponseDto>>> {
    let completion_date = today();
    let resolved = state
        .pothole_service
        .resolve_all_pending(completion_date)
        .await?;
    Ok(Json(ApiResponse::success(
        Some(FinalizeResponseDto {
            resolved,
            completion_date,
        }),
        None,
        None,
    )))
}

/// Potholes resolved on a given day
#[utoipa::path(
    get,
    path = "/api/potholes/history",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Potholes resolved on the date", body = ApiResponse<Vec<PotholeResponseDto>>),
        (status = 400, description = "Malformed date")
    ),
    tag = "potholes"
)]
pub async fn pothole_history(
    State(state): State<PotholeState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ApiResponse<Vec<PotholeResponseDto>>>> {
    let date = query.date.unwrap_or_else(today);
    let potholes = state.pothole_service.list_resolved_on(date).await?;
    Ok(into_list(potholes))
}

/// Navigation link from the depot through every pending pothole
#[utoipa::path(
    get,
    path = "/api/potholes/route",
    responses(
        (status = 200, description = "Route link (absent when nothing is pending)", body = ApiResponse<RouteLinkResponseDto>)
    ),
    tag = "potholes"
)]
pub async fn route_link(
    State(state): State<PotholeState>,
) -> Result<Json<ApiResponse<RouteLinkResponseDto>>> {
    let pending = state
        .pothole_service
        .list_by_status(PotholeStatus::Pending)
        .await?;
    let dto = RouteLinkResponseDto {
        url: state.route_builder.build(&pending),
        stops: pending.len(),
    };
    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}
