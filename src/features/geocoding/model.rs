use async_trait::async_trait;
use thiserror::Error;

use crate::features::potholes::models::Coordinate;
use crate::shared::constants::{UNIDENTIFIED_STREET, UNMAPPED_LOCATION};

/// What the geocoder knows about a coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreetLookup {
    /// Named road or pedestrian way
    Street(String),
    /// The place exists but has no road name
    Unnamed,
    /// Nothing is mapped at the coordinate
    Unmapped,
}

impl StreetLookup {
    /// Label used to prefill the street field
    pub fn label(&self) -> &str {
        match self {
            StreetLookup::Street(name) => name,
            StreetLookup::Unnamed => UNIDENTIFIED_STREET,
            StreetLookup::Unmapped => UNMAPPED_LOCATION,
        }
    }
}

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("geocoding request timed out")]
    Timeout,

    #[error("geocoding request failed: {0}")]
    Request(String),

    #[error("geocoding service returned status {0}")]
    Status(u16),

    #[error("unreadable geocoding response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GeocodingError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GeocodingError::Timeout
        } else if e.is_decode() {
            GeocodingError::Decode(e.to_string())
        } else {
            GeocodingError::Request(e.to_string())
        }
    }
}

/// Resolves a coordinate to a street name
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse_lookup(&self, location: Coordinate) -> Result<StreetLookup, GeocodingError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_labels_are_distinct() {
        assert_eq!(StreetLookup::Street("Rua 7".into()).label(), "Rua 7");
        assert_ne!(StreetLookup::Unnamed.label(), StreetLookup::Unmapped.label());
        assert!(!StreetLookup::Unnamed.label().is_empty());
        assert!(!StreetLookup::Unmapped.label().is_empty());
    }
}
