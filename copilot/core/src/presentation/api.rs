use axum::{
    routing::{get, post},
    Router, Json, extract::State,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use crate::application::kickoff::KickoffService;
use crate::domain::kickoff::{KickoffRequest, KickoffResponse};
use serde_json::json;

pub struct AppState {
    pub kickoff_service: Arc<dyn KickoffService>,
}

pub fn app(service: Arc<dyn KickoffService>) -> Router {
    let state = Arc::new(AppState { kickoff_service: service });

    Router::new()
        .route("/", get(read_root))
        .route("/kickoff", post(kickoff))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn read_root() -> Json<serde_json::Value> {
    Json(json!({ "status": "LinkedIn Copilot API is running" }))
}

// Shape validation (missing/mistyped fields, bad JSON) is the extractor's
// job: it rejects with a 4xx before this handler runs. Once a request gets
// here, both outcomes travel as 200 and the envelope carries the status.
async fn kickoff(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<KickoffRequest>,
) -> Json<KickoffResponse> {
    Json(state.kickoff_service.kickoff(payload).await)
}
