use async_trait::async_trait;
use serde::Deserialize;

use crate::core::config::GeocodingConfig;
use crate::features::geocoding::model::{GeocodingError, ReverseGeocoder, StreetLookup};
use crate::features::potholes::models::Coordinate;

/// Nominatim `/reverse` response structure
///
/// A coordinate with nothing mapped comes back as `{"error": "..."}` with a
/// 200 status.
#[derive(Debug, Deserialize)]
pub struct NominatimReverseResponse {
    pub display_name: Option<String>,
    pub address: Option<NominatimAddress>,
    pub error: Option<String>,
}

/// Nominatim address components
#[derive(Debug, Default, Deserialize)]
pub struct NominatimAddress {
    pub road: Option<String>,
    pub pedestrian: Option<String>,
}

impl NominatimAddress {
    /// Road name, falling back to a pedestrian way
    pub fn street_name(&self) -> Option<String> {
        [&self.road, &self.pedestrian]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .map(str::to_string)
    }
}

impl From<NominatimReverseResponse> for StreetLookup {
    fn from(r: NominatimReverseResponse) -> Self {
        if r.error.is_some() {
            return StreetLookup::Unmapped;
        }
        match r.address.as_ref().and_then(NominatimAddress::street_name) {
            Some(name) => StreetLookup::Street(name),
            None => StreetLookup::Unnamed,
        }
    }
}

/// Reverse geocoding against Nominatim
pub struct GeocodingService {
    client: reqwest::Client,
    base_url: String,
}

impl GeocodingService {
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ReverseGeocoder for GeocodingService {
    async fn reverse_lookup(&self, location: Coordinate) -> Result<StreetLookup, GeocodingError> {
        let url = format!("{}/reverse", self.base_url);
        tracing::debug!(
            "Reverse geocoding ({}, {}) -> {}",
            location.latitude,
            location.longitude,
            url
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", location.latitude.to_string()),
                ("lon", location.longitude.to_string()),
                ("format", "json".to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!("Nominatim returned status: {}", response.status());
            return Err(GeocodingError::Status(response.status().as_u16()));
        }

        let body: NominatimReverseResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::Decode(e.to_string()))?;
        tracing::debug!("Nominatim resolved to {:?}", body.display_name);

        Ok(body.into())
    }
}
