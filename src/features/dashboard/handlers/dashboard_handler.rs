use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::dashboard::dtos::*;
use crate::features::dashboard::services::{DashboardService, Interaction};
use crate::features::potholes::models::Coordinate;
use crate::shared::date::today;
use crate::shared::types::ApiResponse;

type DashboardResponse = Json<ApiResponse<DashboardResponseDto>>;

/// Render the session's screen and wrap it with the interaction message
async fn respond(service: &DashboardService, interaction: Interaction) -> Result<DashboardResponse> {
    let view = service.render(&interaction.session, today()).await?;
    Ok(Json(ApiResponse::success(
        Some(DashboardResponseDto {
            session: interaction.session,
            view,
        }),
        interaction.message,
        None,
    )))
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the current screen
#[utoipa::path(
    post,
    path = "/api/dashboard/view",
    tag = "dashboard",
    request_body = SessionRequestDto,
    responses(
        (status = 200, description = "Rendered dashboard", body = ApiResponse<DashboardResponseDto>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn render_view(
    State(service): State<Arc<DashboardService>>,
    AppJson(dto): AppJson<SessionRequestDto>,
) -> Result<DashboardResponse> {
    respond(
        &service,
        Interaction {
            session: dto.session,
            message: None,
        },
    )
    .await
}

// ============================================================================
// Management
// ============================================================================

/// Select a map point as the draft
#[utoipa::path(
    post,
    path = "/api/dashboard/select",
    tag = "dashboard",
    request_body = SelectPointDto,
    responses(
        (status = 200, description = "Draft selected", body = ApiResponse<DashboardResponseDto>),
        (status = 400, description = "Invalid point or not in management view")
    )
)]
pub async fn select_point(
    State(service): State<Arc<DashboardService>>,
    AppJson(dto): AppJson<SelectPointDto>,
) -> Result<DashboardResponse> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let interaction = service
        .select_point(dto.session, Coordinate::new(dto.latitude, dto.longitude))
        .await?;
    respond(&service, interaction).await
}

/// Save the draft as a pending pothole
#[utoipa::path(
    post,
    path = "/api/dashboard/submit",
    tag = "dashboard",
    request_body = SubmitDraftDto,
    responses(
        (status = 200, description = "Pothole registered", body = ApiResponse<DashboardResponseDto>),
        (status = 400, description = "No point selected or validation error")
    )
)]
pub async fn submit_draft(
    State(service): State<Arc<DashboardService>>,
    AppJson(dto): AppJson<SubmitDraftDto>,
) -> Result<DashboardResponse> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let interaction = service
        .submit_draft(dto.session, dto.street, dto.severity)
        .await?;
    respond(&service, interaction).await
}

/// Delete a row from the control list
#[utoipa::path(
    post,
    path = "/api/dashboard/delete",
    tag = "dashboard",
    request_body = DeleteRowDto,
    responses(
        (status = 200, description = "Row removed or already gone", body = ApiResponse<DashboardResponseDto>),
        (status = 400, description = "Not in management view")
    )
)]
pub async fn delete_row(
    State(service): State<Arc<DashboardService>>,
    AppJson(dto): AppJson<DeleteRowDto>,
) -> Result<DashboardResponse> {
    let interaction = service.delete_pothole(dto.session, dto.id).await?;
    respond(&service, interaction).await
}

/// Resolve every pending pothole with today's date
#[utoipa::path(
    post,
    path = "/api/dashboard/finalize",
    tag = "dashboard",
    request_body = SessionRequestDto,
    responses(
        (status = 200, description = "Work finalized", body = ApiResponse<DashboardResponseDto>),
        (status = 400, description = "Not in management view")
    )
)]
pub async fn finalize_all(
    State(service): State<Arc<DashboardService>>,
    AppJson(dto): AppJson<SessionRequestDto>,
) -> Result<DashboardResponse> {
    let interaction = service.finalize_all(dto.session, today()).await?;
    respond(&service, interaction).await
}

// ============================================================================
// Mode switches
// ============================================================================

/// Open the history report for a day (default today)
#[utoipa::path(
    post,
    path = "/api/dashboard/history",
    tag = "dashboard",
    request_body = ViewHistoryDto,
    responses(
        (status = 200, description = "History report", body = ApiResponse<DashboardResponseDto>)
    )
)]
pub async fn view_history(
    State(service): State<Arc<DashboardService>>,
    AppJson(dto): AppJson<ViewHistoryDto>,
) -> Result<DashboardResponse> {
    let interaction = service.view_history(dto.session, dto.date, today());
    respond(&service, interaction).await
}

/// Return to the management screen
#[utoipa::path(
    post,
    path = "/api/dashboard/today",
    tag = "dashboard",
    request_body = SessionRequestDto,
    responses(
        (status = 200, description = "Management view", body = ApiResponse<DashboardResponseDto>)
    )
)]
pub async fn return_to_today(
    State(service): State<Arc<DashboardService>>,
    AppJson(dto): AppJson<SessionRequestDto>,
) -> Result<DashboardResponse> {
    let interaction = service.return_to_today(dto.session);
    respond(&service, interaction).await
}
