use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::geocoding::handler;
use crate::features::geocoding::model::ReverseGeocoder;

/// Create routes for the geocoding feature
pub fn routes(geocoder: Arc<dyn ReverseGeocoder>) -> Router {
    Router::new()
        .route("/api/geocoding/reverse", get(handler::reverse_geocode))
        .with_state(geocoder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::geocoding::model::{GeocodingError, StreetLookup};
    use crate::features::potholes::models::Coordinate;
    use async_trait::async_trait;
    use axum_test::TestServer;
    use serde_json::Value;

    /// Answers by latitude sign: north has a road, south is offline
    struct HemisphereGeocoder;

    #[async_trait]
    impl ReverseGeocoder for HemisphereGeocoder {
        async fn reverse_lookup(
            &self,
            location: Coordinate,
        ) -> Result<StreetLookup, GeocodingError> {
            if location.latitude >= 0.0 {
                Ok(StreetLookup::Street("Rua Norte".to_string()))
            } else {
                Err(GeocodingError::Timeout)
            }
        }
    }

    fn server() -> TestServer {
        TestServer::new(routes(Arc::new(HemisphereGeocoder))).unwrap()
    }

    #[tokio::test]
    async fn test_reverse_geocode_found() {
        let body: Value = server()
            .get("/api/geocoding/reverse")
            .add_query_param("lat", 1.5)
            .add_query_param("lon", -49.6)
            .await
            .json();
        assert_eq!(body["data"]["street"], "Rua Norte");
        assert_eq!(body["data"]["outcome"], "found");
    }

    #[tokio::test]
    async fn test_reverse_geocode_failure_degrades_to_blank() {
        let response = server()
            .get("/api/geocoding/reverse")
            .add_query_param("lat", -15.3)
            .add_query_param("lon", -49.6)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["street"], "");
        assert_eq!(body["data"]["outcome"], "failed");
    }

    #[tokio::test]
    async fn test_reverse_geocode_rejects_bad_coordinates() {
        server()
            .get("/api/geocoding/reverse")
            .add_query_param("lat", 95.0)
            .add_query_param("lon", 0.0)
            .await
            .assert_status_bad_request();
    }
}
