use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::potholes::models::{Pothole, PotholeSeverity, PotholeStatus};
use crate::shared::validation::STREET_REGEX;

/// Response DTO for a pothole
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PotholeResponseDto {
    pub id: i64,
    pub street: String,
    /// Legacy column, never filled in by the dashboard
    pub neighborhood: Option<String>,
    pub severity: PotholeSeverity,
    pub latitude: f64,
    pub longitude: f64,
    pub status: PotholeStatus,
    /// Set once the pothole is resolved (YYYY-MM-DD)
    pub completion_date: Option<NaiveDate>,
}

impl From<Pothole> for PotholeResponseDto {
    fn from(p: Pothole) -> Self {
        Self {
            id: p.id,
            street: p.street,
            neighborhood: p.neighborhood,
            severity: p.severity,
            latitude: p.latitude,
            longitude: p.longitude,
            status: p.status,
            completion_date: p.completion_date,
        }
    }
}

/// Request DTO for registering a pothole
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePotholeDto {
    /// Street or reference point, may be left blank
    #[serde(default)]
    #[validate(
        length(max = 255, message = "Street must not exceed 255 characters"),
        regex(path = *STREET_REGEX, message = "Street must not contain control characters")
    )]
    pub street: String,

    pub severity: PotholeSeverity,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

/// Query parameters for listing potholes
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListPotholesQuery {
    /// Status filter (default: pending)
    pub status: Option<PotholeStatus>,
}

/// Query parameters for the daily history
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct HistoryQuery {
    /// Completion date, YYYY-MM-DD (default: today)
    pub date: Option<NaiveDate>,
}

/// Result of finalizing the day's work
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FinalizeResponseDto {
    pub resolved: u64,
    pub completion_date: NaiveDate,
}

/// Result of a delete request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletePotholeResponseDto {
    pub id: i64,
    /// `false` when the pothole was already gone
    pub deleted: bool,
}

/// Navigation link through every pending pothole
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RouteLinkResponseDto {
    /// Absent when nothing is pending
    pub url: Option<String>,
    pub stops: usize,
}
