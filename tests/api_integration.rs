//! Integration tests for the assembled Green Guardian router.
//!
//! These tests wire every feature router through `build_router` with mock
//! adapters and drive complete user flows over HTTP:
//! 1. Dashboard questionnaire through pledge and certificate download
//! 2. Waste guidance and label prediction
//! 3. Room analysis with mixed per-file outcomes
//! 4. Middleware (CORS, body limit) applied to the merged router

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use green_guardian::adapters::http::{DashboardAppState, RoomAppState, WasteAppState};
use green_guardian::adapters::{
    InMemorySessionStore, MockVisionProvider, MockWasteClassifier, PulldownMarkupRenderer,
};
use green_guardian::application::{
    ClassifyWasteHandler, IdentifyRoomHandler, PredictWasteHandler,
};
use green_guardian::build_router;
use green_guardian::config::ServerConfig;
use green_guardian::domain::questionnaire::Catalog;
use green_guardian::domain::waste::WasteLabels;
use green_guardian::ports::{SessionStore, VisionError, WasteClassifier};

// =============================================================================
// Test Infrastructure
// =============================================================================

const BOUNDARY: &str = "GG-INTEGRATION-BOUNDARY";
const PNG: [u8; 16] = [
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D, b'I', b'H', b'D', b'R',
];

struct TestApp {
    router: Router,
    vision: MockVisionProvider,
    store: Arc<InMemorySessionStore>,
}

fn test_app(
    server: ServerConfig,
    vision: MockVisionProvider,
    classifier: Option<MockWasteClassifier>,
) -> TestApp {
    let store = Arc::new(InMemorySessionStore::new());
    let classifier = classifier.map(|c| Arc::new(c) as Arc<dyn WasteClassifier>);

    let dashboard = DashboardAppState::new(store.clone());
    let waste = WasteAppState::new(
        ClassifyWasteHandler::new(
            Arc::new(vision.clone()),
            Arc::new(PulldownMarkupRenderer::new()),
        ),
        PredictWasteHandler::new(classifier, Arc::new(WasteLabels::default())),
    );
    let room = RoomAppState::new(IdentifyRoomHandler::new(Arc::new(vision.clone())));

    TestApp {
        router: build_router(&server, dashboard, waste, room),
        vision,
        store,
    }
}

fn default_app() -> TestApp {
    test_app(ServerConfig::default(), MockVisionProvider::new(), None)
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    read_json(app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()).await
}

fn multipart(uri: &str, parts: &[(&str, &str, &[u8])]) -> Request<Body> {
    let mut body = Vec::new();
    for (field, filename, bytes) in parts {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn all_answers(value: bool) -> Value {
    let answers: serde_json::Map<String, Value> = Catalog::questions()
        .iter()
        .map(|q| (q.id.to_string(), Value::Bool(value)))
        .collect();
    json!({ "answers": answers })
}

// =============================================================================
// Dashboard
// =============================================================================

#[tokio::test]
async fn full_dashboard_flow_awards_certificate_and_impact() {
    let app = default_app();
    let router = &app.router;

    let (status, session) = send_json(
        router,
        "POST",
        "/api/dashboard/sessions",
        Some(json!({"building_type": "school"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(session["building_type"], "School");
    let id = session["id"].as_str().unwrap().to_string();
    assert_eq!(app.store.count().await, 1);

    let (status, score) = send_json(
        router,
        "PUT",
        &format!("/api/dashboard/sessions/{id}/answers"),
        Some(all_answers(true)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(score["score"], 100);
    assert_eq!(score["penalty"], 0);
    assert_eq!(score["stats"]["answered"], 20);

    let (status, tips) =
        send_json(router, "GET", &format!("/api/dashboard/sessions/{id}/tips"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tips["missed_count"], 0);

    let (status, report) =
        send_json(router, "GET", &format!("/api/dashboard/sessions/{id}/report"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["gauge"]["reference"], 70);
    assert_eq!(report["categories"].as_array().unwrap().len(), 4);

    let pledge = json!({"name": "Ada Lovelace", "commitments": ["energy", "education"]});
    let (status, certificate) = send_json(
        router,
        "POST",
        &format!("/api/dashboard/sessions/{id}/pledge"),
        Some(pledge.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        certificate["png_file_name"],
        "green_guardian_certificate_ada_lovelace.png"
    );
    assert_eq!(certificate["impact"]["pledges_made"], 1);
    assert_eq!(certificate["impact"]["co2_reduced"], 10.0);

    // A second pledge reissues the certificate without crediting impact again.
    let (_, again) = send_json(
        router,
        "POST",
        &format!("/api/dashboard/sessions/{id}/pledge"),
        Some(pledge),
    )
    .await;
    assert_eq!(again["impact"]["pledges_made"], 1);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/dashboard/sessions/{id}/certificate.svg"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "image/svg+xml"
    );
    let svg = response.into_body().collect().await.unwrap().to_bytes();
    let svg = String::from_utf8(svg.to_vec()).unwrap();
    assert!(svg.contains("Ada Lovelace"));
    assert!(svg.contains("Green Building Score: 100%"));
}

#[tokio::test]
async fn all_no_answers_score_zero_and_list_every_miss() {
    let app = default_app();
    let (_, session) = send_json(&app.router, "POST", "/api/dashboard/sessions", None).await;
    let id = session["id"].as_str().unwrap().to_string();

    let (status, score) = send_json(
        &app.router,
        "PUT",
        &format!("/api/dashboard/sessions/{id}/answers"),
        Some(all_answers(false)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(score["score"], 0);

    let (_, tips) = send_json(
        &app.router,
        "GET",
        &format!("/api/dashboard/sessions/{id}/tips"),
        None,
    )
    .await;
    assert_eq!(tips["missed_count"], 20);
}

#[tokio::test]
async fn pledge_before_answers_certifies_zero_score() {
    let app = default_app();
    let (_, session) = send_json(&app.router, "POST", "/api/dashboard/sessions", None).await;
    let id = session["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &app.router,
        "POST",
        &format!("/api/dashboard/sessions/{id}/pledge"),
        Some(json!({"name": "Ada", "commitments": ["water"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 0);
    assert!(body["svg"].as_str().unwrap().contains("Green Building Score: 0%"));

    let (status, body) = send_json(
        &app.router,
        "GET",
        &format!("/api/dashboard/sessions/{id}/report"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "QUESTIONNAIRE_INCOMPLETE");
}

// =============================================================================
// Footprint
// =============================================================================

#[tokio::test]
async fn annual_footprint_is_served_by_merged_router() {
    let app = default_app();
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/footprint/annual")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("electricity=0&car_distance=0&flights=0&diet=vegetarian"))
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1700.0);
}

// =============================================================================
// Waste
// =============================================================================

#[tokio::test]
async fn waste_guidance_sends_prompt_and_image_to_vision() {
    let vision = MockVisionProvider::new().with_response("## Glass Jar\n\nRecycle it.");
    let app = test_app(ServerConfig::default(), vision, None);

    let response = app
        .router
        .clone()
        .oneshot(multipart("/api/waste/classify", &[("waste_image", "jar.png", &PNG)]))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["html"].as_str().unwrap().contains("<h2>Glass Jar</h2>"));
    let calls = app.vision.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].image.mime, "image/png");
    assert_eq!(calls[0].image.bytes, PNG.to_vec());
}

#[tokio::test]
async fn invalid_gemini_key_surfaces_as_bad_gateway() {
    let vision =
        MockVisionProvider::new().with_error(VisionError::InvalidApiKey("API_KEY_INVALID".into()));
    let app = test_app(ServerConfig::default(), vision, None);

    let response = app
        .router
        .clone()
        .oneshot(multipart("/api/waste/classify", &[("waste_image", "jar.png", &PNG)]))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "VISION_PROVIDER_ERROR");
}

#[tokio::test]
async fn predict_labels_classifier_output() {
    let app = test_app(
        ServerConfig::default(),
        MockVisionProvider::new(),
        Some(MockWasteClassifier::predicting(7)),
    );
    let image = format!(
        "data:image/png;base64,{}",
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, PNG)
    );

    let (status, body) =
        send_json(&app.router, "POST", "/api/waste/predict", Some(json!({ "image": image }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["class_id"], 7);
    assert_eq!(body["prediction_text"], "Battery-Hazardous");
}

#[tokio::test]
async fn predict_without_classifier_is_unavailable() {
    let app = default_app();
    let image = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, PNG);

    let (status, body) =
        send_json(&app.router, "POST", "/api/waste/predict", Some(json!({ "image": image }))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "CLASSIFIER_UNAVAILABLE");
}

// =============================================================================
// Room
// =============================================================================

#[tokio::test]
async fn room_results_keep_upload_order_with_per_file_errors() {
    let vision = MockVisionProvider::new().with_response(
        "```json\n{\"sustainability_score\": 6, \"items\": [], \"greener_alternatives\": [], \"temperature_regulation_suggestions\": [\"Close blinds\"]}\n```",
    );
    let app = test_app(ServerConfig::default(), vision, None);

    let response = app
        .router
        .clone()
        .oneshot(multipart(
            "/api/room/identify",
            &[("images", "kitchen.jpg", &PNG), ("images", "empty.png", &[])],
        ))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["filename"], "kitchen.jpg");
    assert_eq!(results[0]["sustainability_score"], 6.0);
    assert_eq!(results[1]["error"], "Empty file.");
    assert_eq!(app.vision.call_count(), 1);
}

// =============================================================================
// Middleware
// =============================================================================

#[tokio::test]
async fn health_and_cors_on_merged_router() {
    let server = ServerConfig {
        cors_origins: Some("http://localhost:5173".to_string()),
        ..Default::default()
    };
    let app = test_app(server, MockVisionProvider::new(), None);

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = ServerConfig {
        max_upload_bytes: 64,
        ..Default::default()
    };
    let app = test_app(server, MockVisionProvider::new(), None);
    let uri = "/api/dashboard/sessions/6f1c2c1e-8d7a-4b8e-9a51-3c2d1b0a9f88/answers";

    let (status, _) = send_json(&app.router, "PUT", uri, Some(all_answers(true))).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}
