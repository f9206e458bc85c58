use crate::{
    api::AppState,
    db::models::{Event, Registration},
    error::Result,
    events::NewEvent,
    identity::WalletIdentity,
};
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ==================== Request/Response Types ====================

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub event_type: String,
    pub format: String,
    pub skill_level: String,
    pub event_date: String,
    pub start_time: String,
    pub end_time: String,
    pub registration_deadline: String,
    pub min_rating: f64,
    pub max_rating: f64,
    pub entry_fee_usdc: f64,
    pub max_participants: i32,
    pub location: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub success: bool,
    pub event: Event,
}

#[derive(Debug, Serialize)]
pub struct EventWithStats {
    pub event: Event,
    pub current_participants: i32,
    pub spots_remaining: i32,
}

#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub events: Vec<EventWithStats>,
}

#[derive(Debug, Serialize)]
pub struct EventDetailResponse {
    pub event: Event,
    pub current_participants: i32,
    pub registrations: Vec<Registration>,
    pub is_full: bool,
}

// ==================== Router ====================

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(create_event).get(list_events))
        .route("/:id", get(get_event_details))
}

// ==================== Handlers ====================

async fn create_event(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<CreateEventRequest>,
) -> Result<Json<EventResponse>> {
    let identity = WalletIdentity::from_headers(&headers)?;

    let event = state
        .events
        .create_event(NewEvent {
            name: req.name,
            event_type: req.event_type,
            format: req.format,
            skill_level: req.skill_level,
            event_date: req.event_date,
            start_time: req.start_time,
            end_time: req.end_time,
            registration_deadline: req.registration_deadline,
            min_rating: req.min_rating,
            max_rating: req.max_rating,
            entry_fee_usdc: req.entry_fee_usdc,
            max_participants: req.max_participants,
            location: req.location,
            description: req.description,
            image_url: req.image_url,
            created_by: identity.address,
        })
        .await?;

    Ok(Json(EventResponse {
        success: true,
        event,
    }))
}

async fn list_events(State(state): State<Arc<AppState>>) -> Result<Json<EventListResponse>> {
    let events = state.events.list_events().await?;

    let mut results = Vec::new();
    for event in events {
        let ledger_count = state.ledger.count_registrations(&event.id).await?;
        let current_participants = event.current_participants(ledger_count);

        results.push(EventWithStats {
            current_participants,
            spots_remaining: (event.max_participants - current_participants).max(0),
            event,
        });
    }

    Ok(Json(EventListResponse { events: results }))
}

async fn get_event_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EventDetailResponse>> {
    let event = state.events.get_event(&id).await?;

    let registrations = state.ledger.list_registrations(&id).await?;
    let current_participants = event.current_participants(registrations.len() as i64);

    Ok(Json(EventDetailResponse {
        current_participants,
        is_full: current_participants >= event.max_participants,
        event,
        registrations,
    }))
}
