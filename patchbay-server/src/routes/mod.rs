use crate::error::ApiError;
use crate::session::SessionGateway;
use crate::signaling::{SignalingRouter, ws_handler};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use patchbay_core::{InviteAccess, RedeemAccess};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub router: SignalingRouter,
    pub gateway: SessionGateway,
}

pub fn app(state: AppState) -> Router {
    // Browser clients are served from another origin, so CORS stays open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/ws", get(ws_handler))
        .route("/public/redeem/validate", get(validate_redeem))
        .route("/public/approve/validate", get(validate_invite))
        .layer(cors)
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "patchbay signaling relay is running" }))
}

#[derive(Debug, Deserialize)]
struct ValidateParams {
    token: Option<String>,
}

async fn validate_redeem(
    State(state): State<AppState>,
    Query(params): Query<ValidateParams>,
) -> Result<Json<RedeemAccess>, ApiError> {
    let token = params.token.ok_or(ApiError::MissingToken)?;
    let access = state.gateway.validate_redeem(&token).await?;
    Ok(Json(access))
}

async fn validate_invite(
    State(state): State<AppState>,
    Query(params): Query<ValidateParams>,
) -> Result<Json<InviteAccess>, ApiError> {
    let token = params.token.ok_or(ApiError::MissingToken)?;
    let access = state.gateway.validate_invite(&token).await?;
    Ok(Json(access))
}
