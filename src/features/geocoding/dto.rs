use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Query parameters for a reverse lookup
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct ReverseGeocodeQuery {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub lat: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub lon: f64,
}

/// How the suggestion was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LookupOutcome {
    Found,
    Unnamed,
    Unmapped,
    /// The geocoder could not be reached; the suggestion is blank
    Failed,
}

/// Advisory street name for a coordinate
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StreetSuggestionDto {
    pub street: String,
    pub outcome: LookupOutcome,
}
