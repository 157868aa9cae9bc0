//! HTTP routes for footprint endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{annual_footprint, lifestyle_footprint};

/// Routes:
/// - `POST /api/footprint/annual` - Form-encoded annual estimate
/// - `POST /api/footprint/lifestyle` - JSON lifestyle points
pub fn footprint_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api/footprint/annual", post(annual_footprint))
        .route("/api/footprint/lifestyle", post(lifestyle_footprint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn post_form(body: &str) -> (StatusCode, serde_json::Value) {
        let response = footprint_router::<()>()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/footprint/annual")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn annual_totals_all_sources() {
        let (status, body) =
            post_form("electricity=17&car_distance=100&flights=2&diet=vegan").await;

        assert_eq!(status, StatusCode::OK);
        // 100 kWh * 0.82 * 12 = 984; 100 * 52 * 0.404 = 2100.8; 2 * 3 * 250 = 1500; vegan 1500
        let total = body["total"].as_f64().unwrap();
        assert!((total - 6084.8).abs() < 1e-6, "total was {}", total);
        assert_eq!(body["breakdown"]["diet"], 1500.0);
    }

    #[tokio::test]
    async fn missing_fields_count_as_zero() {
        let (status, body) = post_form("diet=average").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2500.0);
    }

    #[tokio::test]
    async fn blank_field_is_rejected() {
        let (status, body) = post_form("electricity=&car_distance=5&flights=1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid input. Please enter numbers only.");
        assert_eq!(body["details"]["field"], "electricity");
    }

    #[tokio::test]
    async fn non_numeric_input_is_rejected() {
        let (status, body) = post_form("electricity=lots").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid input. Please enter numbers only.");
        assert_eq!(body["details"]["field"], "electricity");
    }

    #[tokio::test]
    async fn lifestyle_accepts_form_style_keys() {
        let response = footprint_router::<()>()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/footprint/lifestyle")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"firstName":"Ana","DailyTravel":"3"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["points"].as_i64().unwrap() >= 30);
    }
}
