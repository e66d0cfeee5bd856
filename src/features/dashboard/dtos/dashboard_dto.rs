use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::dashboard::session::SessionState;
use crate::features::potholes::models::{Coordinate, Pothole, PotholeSeverity};
use crate::shared::validation::STREET_REGEX;

// ============================================================================
// Map
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Green,
    Orange,
    Red,
    Black,
    Purple,
    Blue,
}

impl From<PotholeSeverity> for MarkerColor {
    fn from(severity: PotholeSeverity) -> Self {
        match severity {
            PotholeSeverity::Low => MarkerColor::Green,
            PotholeSeverity::Medium => MarkerColor::Orange,
            PotholeSeverity::High => MarkerColor::Red,
            PotholeSeverity::Critical => MarkerColor::Black,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MarkerIcon {
    /// Plain pin
    Pin,
    /// Depot (truck)
    Truck,
    /// Finished work
    Check,
}

/// One marker on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub color: MarkerColor,
    pub icon: MarkerIcon,
    /// Popup text, plain text (never HTML)
    pub popup: Option<String>,
    pub pothole_id: Option<i64>,
}

impl MapMarker {
    pub fn at(point: Coordinate, color: MarkerColor, icon: MarkerIcon) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
            color,
            icon,
            popup: None,
            pothole_id: None,
        }
    }

    pub fn for_pothole(pothole: &Pothole, color: MarkerColor, icon: MarkerIcon) -> Self {
        Self {
            popup: Some(pothole.street.clone()),
            pothole_id: Some(pothole.id),
            ..Self::at(pothole.coordinate(), color, icon)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MapViewDto {
    pub center: Coordinate,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

// ============================================================================
// Views
// ============================================================================

/// Creation form state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DraftFormDto {
    /// Selected map point, absent until the map is clicked
    pub location: Option<Coordinate>,
    /// Prefill for the street field
    pub street: String,
    /// Saving needs a selected point
    pub can_submit: bool,
}

/// Row in the management control list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PotholeRowDto {
    pub id: i64,
    pub street: String,
    pub severity: PotholeSeverity,
}

impl From<&Pothole> for PotholeRowDto {
    fn from(p: &Pothole) -> Self {
        Self {
            id: p.id,
            street: p.street.clone(),
            severity: p.severity,
        }
    }
}

/// Today's open work
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ManagementViewDto {
    pub map: MapViewDto,
    pub form: DraftFormDto,
    /// Navigation link, absent when nothing is pending
    pub route_link: Option<String>,
    pub can_finalize: bool,
    pub rows: Vec<PotholeRowDto>,
}

/// Row in the history summary table
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryRowDto {
    pub street: String,
    pub severity: PotholeSeverity,
}

/// Work closed on one day
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryViewDto {
    pub date: NaiveDate,
    pub resolved_count: usize,
    pub map: MapViewDto,
    pub table: Vec<HistoryRowDto>,
    /// Set when nothing was finished that day
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DashboardViewDto {
    Management(ManagementViewDto),
    History(HistoryViewDto),
}

/// Updated session plus the freshly rendered view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponseDto {
    pub session: SessionState,
    pub view: DashboardViewDto,
}

// ============================================================================
// Interactions
// ============================================================================

/// Interaction that carries only the session
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SessionRequestDto {
    #[serde(default)]
    pub session: SessionState,
}

/// Map click
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SelectPointDto {
    #[serde(default)]
    pub session: SessionState,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

/// Creation form submit
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitDraftDto {
    #[serde(default)]
    pub session: SessionState,
    /// Street as edited by the user; the geocoder suggestion when omitted
    #[validate(
        length(max = 255, message = "Street must not exceed 255 characters"),
        regex(path = *STREET_REGEX, message = "Street must not contain control characters")
    )]
    pub street: Option<String>,
    pub severity: PotholeSeverity,
}

/// Draft fields read back from a client session.
///
/// The session round-trips through the client, so its point and street are
/// checked with the same limits as a direct create.
#[derive(Debug, Clone, Validate)]
pub struct DraftFieldsDto {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
    #[validate(
        length(max = 255, message = "Street must not exceed 255 characters"),
        regex(path = *STREET_REGEX, message = "Street must not contain control characters")
    )]
    pub street: String,
}

impl DraftFieldsDto {
    pub fn new(location: Coordinate, street: impl Into<String>) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
            street: street.into(),
        }
    }

    pub fn location(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Per-row delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteRowDto {
    #[serde(default)]
    pub session: SessionState,
    pub id: i64,
}

/// "View report" for a day
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ViewHistoryDto {
    #[serde(default)]
    pub session: SessionState,
    /// Day to report on (default: today)
    pub date: Option<NaiveDate>,
}
