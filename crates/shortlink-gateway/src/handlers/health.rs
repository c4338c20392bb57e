use crate::model::StatsResponse;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;

pub const HEALTH_MESSAGE: &str = "ShortLink service is running";

pub async fn health_handler() -> &'static str {
    HEALTH_MESSAGE
}

/// Not gated, so it keeps answering while the store is saturated.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(state.store().size()))
}
