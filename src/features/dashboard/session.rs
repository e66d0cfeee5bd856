//! Per-user dashboard session.
//!
//! The session lives on the client: it is sent with every interaction and the
//! updated copy comes back with the rendered view. Nothing here touches
//! storage or the network.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};
use crate::features::potholes::models::Coordinate;

/// Which screen the dashboard shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Today's open work
    #[default]
    Management,
    /// Work closed on the snapshotted date
    History,
}

/// Unsaved map selection for the creation form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DraftSelection {
    #[default]
    Empty,
    Selected {
        latitude: f64,
        longitude: f64,
        /// Geocoder guess, blank when the lookup failed
        suggested_street: String,
    },
}

impl DraftSelection {
    pub fn location(&self) -> Option<Coordinate> {
        match self {
            DraftSelection::Empty => None,
            DraftSelection::Selected {
                latitude,
                longitude,
                ..
            } => Some(Coordinate::new(*latitude, *longitude)),
        }
    }

    pub fn suggested_street(&self) -> &str {
        match self {
            DraftSelection::Empty => "",
            DraftSelection::Selected {
                suggested_street, ..
            } => suggested_street,
        }
    }

    /// True when `point` is exactly the coordinate already selected
    pub fn is_at(&self, point: Coordinate) -> bool {
        self.location() == Some(point)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionState {
    #[serde(default)]
    pub mode: ViewMode,
    #[serde(default)]
    pub draft: DraftSelection,
    /// Day shown in history mode, fixed when the report was requested
    #[serde(default)]
    pub history_date: Option<NaiveDate>,
}

impl SessionState {
    /// Switch to the history report for `date`.
    ///
    /// The date is copied into the session, so the report stays on that day
    /// until this is called again.
    pub fn enter_history(self, date: NaiveDate) -> Self {
        Self {
            mode: ViewMode::History,
            draft: DraftSelection::Empty,
            history_date: Some(date),
        }
    }

    /// Back to management, whatever the current mode
    pub fn return_to_today(self) -> Self {
        Self {
            mode: ViewMode::Management,
            draft: DraftSelection::Empty,
            history_date: None,
        }
    }

    /// Replace the draft with a fresh selection
    pub fn select(self, point: Coordinate, suggested_street: String) -> Self {
        Self {
            draft: DraftSelection::Selected {
                latitude: point.latitude,
                longitude: point.longitude,
                suggested_street,
            },
            ..self
        }
    }

    /// Forget the draft after it was saved
    pub fn clear_draft(self) -> Self {
        Self {
            draft: DraftSelection::Empty,
            ..self
        }
    }

    /// Day the history view should show
    pub fn history_day(&self, today: NaiveDate) -> NaiveDate {
        self.history_date.unwrap_or(today)
    }

    /// Reject actions that only exist on the management screen
    pub fn require_management(&self, action: &str) -> Result<()> {
        match self.mode {
            ViewMode::Management => Ok(()),
            ViewMode::History => Err(AppError::BadRequest(format!(
                "{} is only available in the management view",
                action
            ))),
        }
    }
}
