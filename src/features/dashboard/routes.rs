use axum::{routing::post, Router};
use std::sync::Arc;

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Create dashboard routes
pub fn routes(dashboard_service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/dashboard/view", post(handlers::render_view))
        // Management
        .route("/api/dashboard/select", post(handlers::select_point))
        .route("/api/dashboard/submit", post(handlers::submit_draft))
        .route("/api/dashboard/delete", post(handlers::delete_row))
        .route("/api/dashboard/finalize", post(handlers::finalize_all))
        // Mode switches
        .route("/api/dashboard/history", post(handlers::view_history))
        .route("/api/dashboard/today", post(handlers::return_to_today))
        .with_state(dashboard_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{MapConfig, RouteConfig};
    use crate::features::geocoding::{GeocodingError, ReverseGeocoder, StreetLookup};
    use crate::features::potholes::models::Coordinate;
    use crate::features::potholes::{PotholeService, RouteLinkBuilder};
    use crate::shared::date::today;
    use crate::shared::test_helpers::test_pool;
    use async_trait::async_trait;
    use axum_test::TestServer;
    use fake::{faker::address::en::StreetName, Fake};
    use serde_json::{json, Value};

    /// Always answers with one fixed street
    struct FixedGeocoder(String);

    #[async_trait]
    impl ReverseGeocoder for FixedGeocoder {
        async fn reverse_lookup(
            &self,
            _location: Coordinate,
        ) -> Result<StreetLookup, GeocodingError> {
            Ok(StreetLookup::Street(self.0.clone()))
        }
    }

    async fn server(street: &str) -> TestServer {
        let pool = test_pool().await;
        let service = DashboardService::new(
            Arc::new(PotholeService::new(pool)),
            Arc::new(FixedGeocoder(street.to_string())),
            Arc::new(RouteLinkBuilder::new(&RouteConfig::default())),
            MapConfig::default(),
        );
        TestServer::new(routes(Arc::new(service))).unwrap()
    }

    async fn select(server: &TestServer, session: &Value, lat: f64, lon: f64) -> Value {
        server
            .post("/api/dashboard/select")
            .json(&json!({ "session": session, "latitude": lat, "longitude": lon }))
            .await
            .json()
    }

    #[tokio::test]
    async fn test_initial_view_is_empty_management() {
        let server = server("Rua 7").await;
        let body: Value = server.post("/api/dashboard/view").json(&json!({})).await.json();

        let view = &body["data"]["view"];
        assert_eq!(view["mode"], "management");
        assert_eq!(view["map"]["zoom"], 14);
        assert_eq!(view["map"]["center"]["latitude"], -15.3072);
        assert_eq!(view["map"]["markers"].as_array().unwrap().len(), 1);
        assert_eq!(view["map"]["markers"][0]["icon"], "truck");
        assert_eq!(view["route_link"], Value::Null);
        assert_eq!(view["can_finalize"], false);
        assert_eq!(body["data"]["session"]["draft"]["state"], "empty");
    }

    #[tokio::test]
    async fn test_click_prefills_form_then_submit_lists_row() {
        let street: String = StreetName().fake();
        let server = server(&street).await;

        let selected = select(&server, &json!({}), -15.31, -49.6).await;
        let form = &selected["data"]["view"]["form"];
        assert_eq!(form["street"], street.as_str());
        assert_eq!(form["can_submit"], true);
        assert_eq!(
            selected["data"]["view"]["map"]["markers"][1]["color"],
            "purple"
        );

        let submitted: Value = server
            .post("/api/dashboard/submit")
            .json(&json!({
                "session": selected["data"]["session"],
                "severity": "medium"
            }))
            .await
            .json();
        let view = &submitted["data"]["view"];
        assert!(submitted["message"].is_string());
        assert_eq!(submitted["data"]["session"]["draft"]["state"], "empty");
        assert_eq!(view["rows"][0]["street"], street.as_str());
        assert_eq!(view["rows"][0]["severity"], "medium");
        assert_eq!(view["map"]["markers"][1]["color"], "orange");
        assert_eq!(view["map"]["markers"][1]["popup"], street.as_str());
        assert_eq!(view["can_finalize"], true);
        assert_eq!(
            view["route_link"],
            "https://www.google.com/maps/dir/-15.310306,-49.6175/-15.31,-49.6/"
        );
    }

    #[tokio::test]
    async fn test_submit_without_point_is_bad_request() {
        let server = server("Rua 7").await;
        server
            .post("/api/dashboard/submit")
            .json(&json!({ "street": "Rua 7", "severity": "low" }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_invalid_click_is_rejected() {
        let server = server("Rua 7").await;
        server
            .post("/api/dashboard/select")
            .json(&json!({ "latitude": 91.0, "longitude": 0.0 }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_finalize_then_history_and_back() {
        let server = server("Rua 7").await;
        let selected = select(&server, &json!({}), -15.31, -49.6).await;
        let submitted: Value = server
            .post("/api/dashboard/submit")
            .json(&json!({ "session": selected["data"]["session"], "severity": "low" }))
            .await
            .json();
        let session = submitted["data"]["session"].clone();

        let finalized: Value = server
            .post("/api/dashboard/finalize")
            .json(&json!({ "session": session }))
            .await
            .json();
        assert!(finalized["message"]
            .as_str()
            .unwrap()
            .starts_with("Work completed!"));
        assert_eq!(finalized["data"]["view"]["rows"], json!([]));

        let history: Value = server
            .post("/api/dashboard/history")
            .json(&json!({ "session": session }))
            .await
            .json();
        let view = &history["data"]["view"];
        assert_eq!(view["mode"], "history");
        assert_eq!(view["date"], today().to_string());
        assert_eq!(view["resolved_count"], 1);
        assert_eq!(view["table"][0]["street"], "Rua 7");
        assert_eq!(view["map"]["markers"][0]["color"], "blue");

        // Editing is not available from the report
        server
            .post("/api/dashboard/select")
            .json(&json!({
                "session": history["data"]["session"],
                "latitude": -15.3,
                "longitude": -49.6
            }))
            .await
            .assert_status_bad_request();

        let back: Value = server
            .post("/api/dashboard/today")
            .json(&json!({ "session": history["data"]["session"] }))
            .await
            .json();
        assert_eq!(back["data"]["view"]["mode"], "management");
        assert_eq!(back["data"]["session"]["history_date"], Value::Null);
    }

    #[tokio::test]
    async fn test_history_for_quiet_day_has_notice() {
        let server = server("Rua 7").await;
        let body: Value = server
            .post("/api/dashboard/history")
            .json(&json!({ "date": "2001-02-03" }))
            .await
            .json();

        let view = &body["data"]["view"];
        assert_eq!(view["date"], "2001-02-03");
        assert_eq!(view["resolved_count"], 0);
        assert!(view["notice"].is_string());
    }

    #[tokio::test]
    async fn test_delete_row_refreshes_list() {
        let server = server("Rua 7").await;
        let selected = select(&server, &json!({}), -15.31, -49.6).await;
        let submitted: Value = server
            .post("/api/dashboard/submit")
            .json(&json!({ "session": selected["data"]["session"], "severity": "critical" }))
            .await
            .json();
        let id = submitted["data"]["view"]["rows"][0]["id"].clone();

        let deleted: Value = server
            .post("/api/dashboard/delete")
            .json(&json!({ "session": submitted["data"]["session"], "id": id }))
            .await
            .json();
        assert_eq!(deleted["data"]["view"]["rows"], json!([]));
        assert_eq!(deleted["data"]["view"]["route_link"], Value::Null);
    }

    #[tokio::test]
    async fn test_forged_session_draft_is_not_saved() {
        let server = server("Rua 7").await;
        let forged = json!({
            "session": {
                "draft": {
                    "state": "selected",
                    "latitude": 999.0,
                    "longitude": -500.0,
                    "suggested_street": format!("Rua\n\u{1b}[31m{}", "x".repeat(400))
                }
            },
            "severity": "low"
        });

        server
            .post("/api/dashboard/submit")
            .json(&forged)
            .await
            .assert_status_bad_request();

        let view: Value = server.post("/api/dashboard/view").json(&json!({})).await.json();
        assert_eq!(view["data"]["view"]["rows"], json!([]));
        assert_eq!(view["data"]["view"]["route_link"], Value::Null);
    }
}
