use utoipa::{Modify, OpenApi};

use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers, session};
use crate::features::geocoding::{dto as geocoding_dto, handler as geocoding_handler};
use crate::features::potholes::dtos as potholes_dtos;
use crate::features::potholes::handlers::pothole_handler;
use crate::features::potholes::models as potholes_models;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Potholes
        pothole_handler::list_potholes,
        pothole_handler::get_pothole,
        pothole_handler::create_pothole,
        pothole_handler::delete_pothole,
        pothole_handler::finalize_potholes,
        pothole_handler::pothole_history,
        pothole_handler::route_link,
        // Geocoding
        geocoding_handler::reverse_geocode,
        // Dashboard
        dashboard_handlers::render_view,
        dashboard_handlers::select_point,
        dashboard_handlers::submit_draft,
        dashboard_handlers::delete_row,
        dashboard_handlers::finalize_all,
        dashboard_handlers::view_history,
        dashboard_handlers::return_to_today,
    ),
    components(
        schemas(
            Meta,
            // Potholes
            potholes_models::PotholeStatus,
            potholes_models::PotholeSeverity,
            potholes_models::Coordinate,
            potholes_dtos::PotholeResponseDto,
            potholes_dtos::CreatePotholeDto,
            potholes_dtos::FinalizeResponseDto,
            potholes_dtos::DeletePotholeResponseDto,
            potholes_dtos::RouteLinkResponseDto,
            ApiResponse<potholes_dtos::PotholeResponseDto>,
            ApiResponse<Vec<potholes_dtos::PotholeResponseDto>>,
            ApiResponse<potholes_dtos::FinalizeResponseDto>,
            ApiResponse<potholes_dtos::DeletePotholeResponseDto>,
            ApiResponse<potholes_dtos::RouteLinkResponseDto>,
            // Geocoding
            geocoding_dto::LookupOutcome,
            geocoding_dto::StreetSuggestionDto,
            ApiResponse<geocoding_dto::StreetSuggestionDto>,
            // Dashboard
            session::ViewMode,
            session::DraftSelection,
            session::SessionState,
            dashboard_dtos::MarkerColor,
            dashboard_dtos::MarkerIcon,
            dashboard_dtos::MapMarker,
            dashboard_dtos::MapViewDto,
            dashboard_dtos::DraftFormDto,
            dashboard_dtos::PotholeRowDto,
            dashboard_dtos::ManagementViewDto,
            dashboard_dtos::HistoryRowDto,
            dashboard_dtos::HistoryViewDto,
            dashboard_dtos::DashboardViewDto,
            dashboard_dtos::DashboardResponseDto,
            dashboard_dtos::SessionRequestDto,
            dashboard_dtos::SelectPointDto,
            dashboard_dtos::SubmitDraftDto,
            dashboard_dtos::DeleteRowDto,
            dashboard_dtos::ViewHistoryDto,
            ApiResponse<dashboard_dtos::DashboardResponseDto>,
        )
    ),
    tags(
        (name = "potholes", description = "Pothole register, daily finalization and history"),
        (name = "geocoding", description = "Street suggestions for map coordinates"),
        (name = "dashboard", description = "Dispatcher dashboard screens and interactions"),
    ),
    info(
        title = "CityFix API",
        version = "0.1.0",
        description = "API documentation for CityFix",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/potholes",
            "/api/potholes/{id}",
            "/api/potholes/finalize",
            "/api/potholes/history",
            "/api/potholes/route",
            "/api/geocoding/reverse",
            "/api/dashboard/view",
            "/api/dashboard/today",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier_overrides_defaults() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Ceres Roads".to_string(),
            version: "2.0.0".to_string(),
            description: "Municipal deployment".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Ceres Roads");
        assert_eq!(doc.info.version, "2.0.0");
        assert_eq!(doc.info.description.as_deref(), Some("Municipal deployment"));
    }
}
