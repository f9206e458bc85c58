use crate::{api::AppState, error::Result, payments::NewCharge};
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ==================== Request/Response Types ====================

#[derive(Debug, Deserialize)]
pub struct CreateChargeRequest {
    pub amount: f64,
    pub recipient_address: String,
    pub recipient_name: String,
    pub event_id: String,
    pub dupr_id: String,
    pub dupr_rating: f64,
}

#[derive(Debug, Serialize)]
pub struct ChargeResponse {
    pub data: ChargeData,
}

#[derive(Debug, Serialize)]
pub struct ChargeData {
    pub id: String,
    pub status: String,
}

// ==================== Router ====================

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", post(create_charge))
}

// ==================== Handlers ====================

async fn create_charge(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateChargeRequest>,
) -> Result<Json<ChargeResponse>> {
    let charge = state
        .charges
        .create_charge(NewCharge {
            amount: req.amount,
            recipient_address: req.recipient_address,
            recipient_name: req.recipient_name,
            event_id: req.event_id,
            dupr_id: req.dupr_id,
            dupr_rating: req.dupr_rating,
        })
        .await?;

    Ok(Json(ChargeResponse {
        data: ChargeData {
            id: charge.id,
            status: charge.status,
        },
    }))
}
