use crate::error::{AppJson, Result};
use crate::model::{DecodeRequest, DecodeResponse, EncodeRequest, EncodeResponse};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

pub async fn encode_handler(
    State(state): State<AppState>,
    AppJson(request): AppJson<EncodeRequest>,
) -> Result<Json<EncodeResponse>> {
    request.validate()?;
    info!(url = %request.url, "received encode request");

    let store = state.store();
    let code = state
        .gate()
        .try_run(|| store.encode(&request.url))
        .into_result()?;

    let response = EncodeResponse::new(store.short_url(&code), request.url);
    debug!(short_url = %response.short_url, "encode successful");
    Ok(Json(response))
}

pub async fn decode_handler(
    State(state): State<AppState>,
    AppJson(request): AppJson<DecodeRequest>,
) -> Result<Json<DecodeResponse>> {
    request.validate()?;
    info!(short_url = %request.short_url, "received decode request");

    let store = state.store();
    let original_url = state
        .gate()
        .try_run(|| store.decode(&request.short_url))
        .into_result()?;

    debug!(original_url = %original_url, "decode successful");
    Ok(Json(DecodeResponse::new(original_url, request.short_url)))
}
