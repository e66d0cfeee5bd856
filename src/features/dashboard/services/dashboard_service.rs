use std::sync::Arc;

use chrono::NaiveDate;
use validator::Validate;

use crate::core::config::MapConfig;
use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::*;
use crate::features::dashboard::session::{SessionState, ViewMode};
use crate::features::geocoding::ReverseGeocoder;
use crate::features::potholes::models::{Coordinate, CreatePothole, PotholeSeverity, PotholeStatus};
use crate::features::potholes::{PotholeService, RouteLinkBuilder};
use crate::shared::constants::MAX_STREET_LENGTH;

/// Outcome of one dashboard interaction, before rendering
#[derive(Debug, Clone)]
pub struct Interaction {
    pub session: SessionState,
    pub message: Option<String>,
}

impl Interaction {
    fn quiet(session: SessionState) -> Self {
        Self {
            session,
            message: None,
        }
    }

    fn with_message(session: SessionState, message: impl Into<String>) -> Self {
        Self {
            session,
            message: Some(message.into()),
        }
    }
}

/// Drives the dashboard screens on top of storage and the geocoder
pub struct DashboardService {
    pothole_service: Arc<PotholeService>,
    geocoder: Arc<dyn ReverseGeocoder>,
    route_builder: Arc<RouteLinkBuilder>,
    map: MapConfig,
}

impl DashboardService {
    pub fn new(
        pothole_service: Arc<PotholeService>,
        geocoder: Arc<dyn ReverseGeocoder>,
        route_builder: Arc<RouteLinkBuilder>,
        map: MapConfig,
    ) -> Self {
        Self {
            pothole_service,
            geocoder,
            route_builder,
            map,
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render the screen the session is on from current storage state
    pub async fn render(&self, session: &SessionState, today: NaiveDate) -> Result<DashboardViewDto> {
        match session.mode {
            ViewMode::Management => self.render_management(session).await,
            ViewMode::History => self.render_history(session.history_day(today)).await,
        }
    }

    async fn render_management(&self, session: &SessionState) -> Result<DashboardViewDto> {
        let pending = self
            .pothole_service
            .list_by_status(PotholeStatus::Pending)
            .await?;

        let mut markers = Vec::with_capacity(pending.len() + 2);
        markers.push(MapMarker::at(
            self.route_builder.depot(),
            MarkerColor::Black,
            MarkerIcon::Truck,
        ));
        markers.extend(
            pending
                .iter()
                .map(|p| MapMarker::for_pothole(p, p.severity.into(), MarkerIcon::Pin)),
        );
        let draft_location = session.draft.location();
        if let Some(point) = draft_location {
            markers.push(MapMarker::at(point, MarkerColor::Purple, MarkerIcon::Pin));
        }

        Ok(DashboardViewDto::Management(ManagementViewDto {
            map: self.map_view(markers),
            form: DraftFormDto {
                location: draft_location,
                street: session.draft.suggested_street().to_string(),
                can_submit: draft_location.is_some(),
            },
            route_link: self.route_builder.build(&pending),
            can_finalize: !pending.is_empty(),
            rows: pending.iter().map(PotholeRowDto::from).collect(),
        }))
    }

    async fn render_history(&self, date: NaiveDate) -> Result<DashboardViewDto> {
        let resolved = self.pothole_service.list_resolved_on(date).await?;

        let markers = resolved
            .iter()
            .map(|p| MapMarker::for_pothole(p, MarkerColor::Blue, MarkerIcon::Check))
            .collect();
        let notice = resolved
            .is_empty()
            .then(|| "No finished work recorded on this date".to_string());

        Ok(DashboardViewDto::History(HistoryViewDto {
            date,
            resolved_count: resolved.len(),
            map: self.map_view(markers),
            table: resolved
                .iter()
                .map(|p| HistoryRowDto {
                    street: p.street.clone(),
                    severity: p.severity,
                })
                .collect(),
            notice,
        }))
    }

    fn map_view(&self, markers: Vec<MapMarker>) -> MapViewDto {
        MapViewDto {
            center: self.map.center,
            zoom: self.map.zoom,
            markers,
        }
    }

    // ========================================================================
    // Interactions
    // ========================================================================

    /// Map click: select `point` as the draft and look up its street.
    ///
    /// Clicking the point that is already selected changes nothing and does
    /// not hit the geocoder.
    pub async fn select_point(&self, session: SessionState, point: Coordinate) -> Result<Interaction> {
        session.require_management("Selecting a point")?;
        if let Some(location) = session.draft.location() {
            checked_draft(location, session.draft.suggested_street())?;
        }

        if session.draft.is_at(point) {
            return Ok(Interaction::quiet(session));
        }

        let suggested_street = match self.geocoder.reverse_lookup(point).await {
            Ok(lookup) => clean_suggestion(lookup.label()),
            Err(e) => {
                tracing::warn!(
                    "Street lookup for ({}, {}) failed, leaving suggestion blank: {}",
                    point.latitude,
                    point.longitude,
                    e
                );
                String::new()
            }
        };

        Ok(Interaction::quiet(session.select(point, suggested_street)))
    }

    /// Save the draft as a pending pothole and clear the selection
    pub async fn submit_draft(
        &self,
        session: SessionState,
        street: Option<String>,
        severity: PotholeSeverity,
    ) -> Result<Interaction> {
        session.require_management("Saving a pothole")?;

        let location = session.draft.location().ok_or_else(|| {
            AppError::BadRequest("Select a point on the map before saving".to_string())
        })?;
        let street = street.unwrap_or_else(|| session.draft.suggested_street().to_string());
        let draft = checked_draft(location, street.trim())?;

        let pothole = self
            .pothole_service
            .create(&CreatePothole {
                location: draft.location(),
                street: draft.street,
                severity,
            })
            .await?;

        Ok(Interaction::with_message(
            session.clear_draft(),
            format!("Pothole #{} registered", pothole.id),
        ))
    }

    /// Remove one row. Unknown ids are ignored.
    pub async fn delete_pothole(&self, session: SessionState, id: i64) -> Result<Interaction> {
        session.require_management("Deleting a pothole")?;

        if self.pothole_service.delete(id).await? {
            Ok(Interaction::with_message(session, format!("Pothole #{} removed", id)))
        } else {
            Ok(Interaction::quiet(session))
        }
    }

    /// Resolve every pending pothole with `today` as completion date
    pub async fn finalize_all(&self, session: SessionState, today: NaiveDate) -> Result<Interaction> {
        session.require_management("Finalizing work")?;

        let resolved = self.pothole_service.resolve_all_pending(today).await?;
        let message = if resolved == 0 {
            "No pending potholes to finalize".to_string()
        } else {
            format!("Work completed! {} potholes filled", resolved)
        };
        Ok(Interaction::with_message(session, message))
    }

    /// "View report": snapshot `date` (default today) and switch to history
    pub fn view_history(
        &self,
        session: SessionState,
        date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Interaction {
        Interaction::quiet(session.enter_history(date.unwrap_or(today)))
    }

    /// "Return to today": always lands on management
    pub fn return_to_today(&self, session: SessionState) -> Interaction {
        Interaction::quiet(session.return_to_today())
    }
}

/// Draft point and street as they will be stored, or a validation error
fn checked_draft(location: Coordinate, street: &str) -> Result<DraftFieldsDto> {
    let draft = DraftFieldsDto::new(location, street);
    draft
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(draft)
}

/// Geocoder label fit for the street field: control characters dropped,
/// capped at the stored length
fn clean_suggestion(label: &str) -> String {
    let cleaned: String = label.chars().filter(|c| !c.is_control()).collect();
    cleaned.trim().chars().take(MAX_STREET_LENGTH).collect()
}
