use crate::{
    api::AppState,
    db::models::Registration,
    error::{AppError, Result},
    registration::NewRegistration,
};
use axum::{
    extract::{Query, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ==================== Request/Response Types ====================

#[derive(Debug, Deserialize)]
pub struct CreateRegistrationRequest {
    pub event_id: String,
    /// Wallet address or a resolvable name handle ("name.eth",
    /// "name.base.eth").
    pub player_address: String,
    pub player_name: String,
    pub dupr_id: String,
    pub dupr_rating: f64,
}

#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub success: bool,
    pub registration: Registration,
}

#[derive(Debug, Deserialize)]
pub struct ListRegistrationsParams {
    pub event_id: String,
}

#[derive(Debug, Serialize)]
pub struct RegistrationListResponse {
    pub registrations: Vec<Registration>,
}

// ==================== Router ====================

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", post(create_registration).get(list_registrations))
}

// ==================== Handlers ====================

async fn create_registration(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateRegistrationRequest>,
) -> Result<Json<RegistrationResponse>> {
    let player_address = state
        .resolver
        .resolve(&req.player_address)
        .await
        .ok_or_else(|| {
            AppError::Validation(format!(
                "Could not resolve '{}' to a wallet address",
                req.player_address
            ))
        })?;

    let registration = state
        .ledger
        .register(NewRegistration {
            event_id: req.event_id,
            player_address,
            player_name: req.player_name,
            dupr_id: req.dupr_id,
            dupr_rating: req.dupr_rating,
        })
        .await?;

    Ok(Json(RegistrationResponse {
        success: true,
        registration,
    }))
}

async fn list_registrations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListRegistrationsParams>,
) -> Result<Json<RegistrationListResponse>> {
    let registrations = state.ledger.list_registrations(&params.event_id).await?;

    Ok(Json(RegistrationListResponse { registrations }))
}
