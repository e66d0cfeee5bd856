use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Pothole status, stored as lowercase text
///
/// `Pending -> Resolved` is the only transition and it is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PotholeStatus {
    Pending,
    Resolved,
}

impl std::fmt::Display for PotholeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PotholeStatus::Pending => write!(f, "pending"),
            PotholeStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// Pothole severity, ordered from least to most urgent
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Type, ToSchema,
)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PotholeSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for PotholeSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PotholeSeverity::Low => write!(f, "low"),
            PotholeSeverity::Medium => write!(f, "medium"),
            PotholeSeverity::High => write!(f, "high"),
            PotholeSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Database model for a pothole report
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Pothole {
    pub id: i64,
    pub street: String,
    pub neighborhood: Option<String>,
    pub severity: PotholeSeverity,
    pub latitude: f64,
    pub longitude: f64,
    pub status: PotholeStatus,
    pub completion_date: Option<NaiveDate>,
}

impl Pothole {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Data for registering a new pothole
#[derive(Debug, Clone)]
pub struct CreatePothole {
    pub street: String,
    pub severity: PotholeSeverity,
    pub location: Coordinate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_is_ordered_by_urgency() {
        assert!(PotholeSeverity::Low < PotholeSeverity::Medium);
        assert!(PotholeSeverity::Medium < PotholeSeverity::High);
        assert!(PotholeSeverity::High < PotholeSeverity::Critical);
    }

    #[test]
    fn test_enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&PotholeSeverity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(
            serde_json::from_str::<PotholeStatus>("\"resolved\"").unwrap(),
            PotholeStatus::Resolved
        );
        assert_eq!(PotholeStatus::Pending.to_string(), "pending");
    }
}
