//! Event catalog: seed/demo events unioned with user-created events.
//!
//! The store owns event metadata and the capacity limit. It never stores a
//! live participant count; that is derived from the registration ledger.

mod seed;

use crate::{
    audit,
    db::models::{Event, EventFormat, EventType, SkillLevel},
    db::DbPool,
    error::{AppError, Result},
};
use chrono::Utc;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// Input fields for event creation. Creator identity is supplied by the
/// authenticated wallet, not the request body.
#[derive(Debug, Clone)]
pub struct NewEvent {
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
    pub created_by: String,
}

pub struct EventStore {
    pool: Arc<DbPool>,
}

impl EventStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Create a new event with a fresh id and creation timestamp.
    ///
    /// Multiple events may share a name; there is no duplicate check.
    pub async fn create_event(&self, input: NewEvent) -> Result<Event> {
        let (event_type, format, skill_level) = parse_labels(&input)?;
        validate_new_event(&input)?;

        let event = Event {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            event_type: event_type.as_str().to_string(),
            format: format.as_str().to_string(),
            skill_level: skill_level.as_str().to_string(),
            event_date: input.event_date,
            start_time: input.start_time,
            end_time: input.end_time,
            registration_deadline: input.registration_deadline,
            min_rating: input.min_rating,
            max_rating: input.max_rating,
            entry_fee_usdc: input.entry_fee_usdc,
            max_participants: input.max_participants,
            seed_participants: 0,
            location: input.location,
            description: input.description,
            image_url: input.image_url,
            created_by: input.created_by,
            created_at: Utc::now().to_rfc3339(),
        };

        insert_event(&self.pool, &event).await?;

        audit::log_event_created(&event.id, &event.name, &event.created_by);

        Ok(event)
    }

    /// All known events in insertion order.
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let events: Vec<Event> = sqlx::query_as("SELECT * FROM events ORDER BY rowid")
            .fetch_all(&*self.pool)
            .await?;

        Ok(events)
    }

    pub async fn get_event(&self, id: &str) -> Result<Event> {
        let event: Event = sqlx::query_as("SELECT * FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))?;

        Ok(event)
    }

    /// Load the demo events. Idempotent; events already present keep their
    /// stored state.
    pub async fn seed_demo_events(&self) -> Result<()> {
        for event in seed::demo_events() {
            sqlx::query(
                "INSERT OR IGNORE INTO events (
                     id, name, event_type, format, skill_level, event_date,
                     start_time, end_time, registration_deadline, min_rating,
                     max_rating, entry_fee_usdc, max_participants,
                     seed_participants, location, description, image_url,
                     created_by, created_at
                 ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&event.id)
            .bind(&event.name)
            .bind(&event.event_type)
            .bind(&event.format)
            .bind(&event.skill_level)
            .bind(&event.event_date)
            .bind(&event.start_time)
            .bind(&event.end_time)
            .bind(&event.registration_deadline)
            .bind(event.min_rating)
            .bind(event.max_rating)
            .bind(event.entry_fee_usdc)
            .bind(event.max_participants)
            .bind(event.seed_participants)
            .bind(&event.location)
            .bind(&event.description)
            .bind(&event.image_url)
            .bind(&event.created_by)
            .bind(&event.created_at)
            .execute(&*self.pool)
            .await?;
        }

        tracing::info!("Demo events seeded");
        Ok(())
    }
}

async fn insert_event(pool: &DbPool, event: &Event) -> Result<()> {
    sqlx::query(
        "INSERT INTO events (
             id, name, event_type, format, skill_level, event_date,
             start_time, end_time, registration_deadline, min_rating,
             max_rating, entry_fee_usdc, max_participants, seed_participants,
             location, description, image_url, created_by, created_at
         ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&event.id)
    .bind(&event.name)
    .bind(&event.event_type)
    .bind(&event.format)
    .bind(&event.skill_level)
    .bind(&event.event_date)
    .bind(&event.start_time)
    .bind(&event.end_time)
    .bind(&event.registration_deadline)
    .bind(event.min_rating)
    .bind(event.max_rating)
    .bind(event.entry_fee_usdc)
    .bind(event.max_participants)
    .bind(event.seed_participants)
    .bind(&event.location)
    .bind(&event.description)
    .bind(&event.image_url)
    .bind(&event.created_by)
    .bind(&event.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Parse the enumerated label fields, rejecting unknown labels.
fn parse_labels(input: &NewEvent) -> Result<(EventType, EventFormat, SkillLevel)> {
    let event_type = EventType::from_str(&input.event_type).map_err(|_| {
        AppError::Validation(format!("Unknown event type '{}'", input.event_type))
    })?;
    let format = EventFormat::from_str(&input.format)
        .map_err(|_| AppError::Validation(format!("Unknown event format '{}'", input.format)))?;
    let skill_level = SkillLevel::from_str(&input.skill_level).map_err(|_| {
        AppError::Validation(format!("Unknown skill level '{}'", input.skill_level))
    })?;

    Ok((event_type, format, skill_level))
}

fn validate_new_event(input: &NewEvent) -> Result<()> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation("Event name is required".to_string()));
    }
    if input.event_date.trim().is_empty()
        || input.start_time.trim().is_empty()
        || input.end_time.trim().is_empty()
    {
        return Err(AppError::Validation(
            "Event date and time window are required".to_string(),
        ));
    }
    if input.registration_deadline.trim().is_empty() {
        return Err(AppError::Validation(
            "Registration deadline is required".to_string(),
        ));
    }
    if input.location.trim().is_empty() {
        return Err(AppError::Validation(
            "Event location is required".to_string(),
        ));
    }
    if input.min_rating > input.max_rating {
        return Err(AppError::Validation(
            "Minimum rating cannot exceed maximum rating".to_string(),
        ));
    }
    if input.max_participants <= 0 {
        return Err(AppError::Validation(
            "Max participants must be positive".to_string(),
        ));
    }
    if input.entry_fee_usdc < 0.0 {
        return Err(AppError::Validation(
            "Entry fee must be non-negative".to_string(),
        ));
    }

    Ok(())
}
