use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::geocoding::dto::{LookupOutcome, ReverseGeocodeQuery, StreetSuggestionDto};
use crate::features::geocoding::model::{ReverseGeocoder, StreetLookup};
use crate::features::potholes::models::Coordinate;
use crate::shared::types::ApiResponse;

/// Suggest a street name for a coordinate
///
/// Never fails because of the geocoder: an unreachable service yields a blank
/// suggestion with outcome `failed`.
#[utoipa::path(
    get,
    path = "/api/geocoding/reverse",
    params(ReverseGeocodeQuery),
    responses(
        (status = 200, description = "Street suggestion", body = ApiResponse<StreetSuggestionDto>),
        (status = 400, description = "Coordinate out of range")
    ),
    tag = "geocoding"
)]
pub async fn reverse_geocode(
    State(geocoder): State<Arc<dyn ReverseGeocoder>>,
    Query(query): Query<ReverseGeocodeQuery>,
) -> Result<Json<ApiResponse<StreetSuggestionDto>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let dto = match geocoder
        .reverse_lookup(Coordinate::new(query.lat, query.lon))
        .await
    {
        Ok(lookup) => {
            let outcome = match lookup {
                StreetLookup::Street(_) => LookupOutcome::Found,
                StreetLookup::Unnamed => LookupOutcome::Unnamed,
                StreetLookup::Unmapped => LookupOutcome::Unmapped,
            };
            StreetSuggestionDto {
                street: lookup.label().to_string(),
                outcome,
            }
        }
        Err(e) => {
            tracing::warn!("Reverse geocoding failed, leaving street blank: {}", e);
            StreetSuggestionDto {
                street: String::new(),
                outcome: LookupOutcome::Failed,
            }
        }
    };

    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}
