//! Green Guardian server binary.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use green_guardian::adapters::classifier::load_labels_or_default;
use green_guardian::adapters::http::{DashboardAppState, RoomAppState, WasteAppState};
use green_guardian::adapters::{
    GeminiConfig, GeminiVisionProvider, InMemorySessionStore, PulldownMarkupRenderer,
    RemoteClassifierConfig, RemoteWasteClassifier,
};
use green_guardian::application::{
    ClassifyWasteHandler, IdentifyRoomHandler, PredictWasteHandler,
};
use green_guardian::build_router;
use green_guardian::config::{AppConfig, ClassifierConfig};
use green_guardian::ports::{MarkupRenderer, SessionStore, VisionProvider, WasteClassifier};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config);
    config.validate().context("Invalid configuration")?;

    let api_key = config
        .vision
        .gemini_api_key
        .clone()
        .context("GEMINI_API_KEY is not set")?;
    let vision: Arc<dyn VisionProvider> = Arc::new(
        GeminiVisionProvider::new(
            GeminiConfig::new(api_key)
                .with_model(config.vision.model.clone())
                .with_base_url(config.vision.base_url.clone())
                .with_timeout(config.vision.timeout()),
        )
        .map_err(|e| anyhow::anyhow!("Failed to initialize Gemini provider: {}", e))?,
    );
    let renderer: Arc<dyn MarkupRenderer> = Arc::new(PulldownMarkupRenderer::default());
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    let classifier = build_classifier(&config.classifier)?;
    let labels = Arc::new(load_labels_or_default(config.classifier.labels_path.as_deref()).await);

    let dashboard = DashboardAppState::new(store);
    let waste = WasteAppState::new(
        ClassifyWasteHandler::new(vision.clone(), renderer),
        PredictWasteHandler::new(classifier, labels),
    );
    let room = RoomAppState::new(IdentifyRoomHandler::new(vision));

    let app = build_router(&config.server, dashboard, waste, room);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(
        %addr,
        model = %config.vision.model,
        environment = ?config.server.environment,
        "Green Guardian listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

fn build_classifier(config: &ClassifierConfig) -> Result<Option<Arc<dyn WasteClassifier>>> {
    let Some(endpoint) = config.endpoint() else {
        warn!("No classifier endpoint configured; /api/waste/predict will return 503");
        return Ok(None);
    };

    let classifier = RemoteWasteClassifier::new(
        RemoteClassifierConfig::new(endpoint).with_timeout(config.timeout()),
    )
    .map_err(|e| anyhow::anyhow!("Failed to initialize waste classifier: {}", e))?;
    info!(endpoint, "Waste classifier configured");
    Ok(Some(Arc::new(classifier)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
