//! Registration ledger: append-only record of registrations per event.
//!
//! The ledger is the sole source of truth for live participant counts and
//! the enforcement point for the capacity invariant. Registrations are
//! never mutated or deleted once accepted.

use crate::{
    audit,
    db::models::{Event, Registration},
    db::DbPool,
    error::{AppError, Result},
    identity,
};
use std::sync::Arc;

/// Input fields for a registration attempt. `player_address` must already be
/// a resolved account identifier; name resolution happens at the API layer.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub event_id: String,
    pub player_address: String,
    pub player_name: String,
    pub dupr_id: String,
    pub dupr_rating: f64,
}

pub struct RegistrationLedger {
    pool: Arc<DbPool>,
}

impl RegistrationLedger {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Accept or reject a registration attempt.
    ///
    /// The capacity check and the insert execute as one conditional INSERT
    /// statement, so two concurrent attempts for the last open slot cannot
    /// both succeed.
    pub async fn register(&self, input: NewRegistration) -> Result<Registration> {
        let event = self.load_event(&input.event_id).await?;

        if !input.dupr_rating.is_finite()
            || input.dupr_rating < event.min_rating
            || input.dupr_rating > event.max_rating
        {
            return Err(AppError::Validation(format!(
                "DUPR rating must be between {}",
                event.rating_band()
            )));
        }

        if !identity::is_wallet_address(&input.player_address) {
            return Err(AppError::Validation(format!(
                "Invalid wallet address '{}'",
                input.player_address
            )));
        }

        let registration = Registration::new(
            input.event_id,
            input.player_address,
            input.player_name,
            input.dupr_id,
            input.dupr_rating,
        );

        let result = sqlx::query(
            "INSERT INTO registrations (
                 id, event_id, player_address, player_name, dupr_id,
                 dupr_rating, registration_date, status
             )
             SELECT ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8
             WHERE (SELECT COUNT(*) FROM registrations WHERE event_id = ?2) < ?9",
        )
        .bind(&registration.id)
        .bind(&registration.event_id)
        .bind(&registration.player_address)
        .bind(&registration.player_name)
        .bind(&registration.dupr_id)
        .bind(registration.dupr_rating)
        .bind(&registration.registration_date)
        .bind(&registration.status)
        .bind(event.max_participants)
        .execute(&*self.pool)
        .await;

        match result {
            Ok(done) if done.rows_affected() == 0 => {
                audit::log_registration_rejected(
                    &registration.event_id,
                    &registration.player_address,
                    "event full",
                );
                Err(AppError::CapacityExceeded(format!(
                    "Event is full ({} participants max)",
                    event.max_participants
                )))
            }
            Ok(_) => {
                audit::log_registration_accepted(
                    &registration.event_id,
                    &registration.player_address,
                    registration.dupr_rating,
                );
                Ok(registration)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                audit::log_registration_rejected(
                    &registration.event_id,
                    &registration.player_address,
                    "already registered",
                );
                Err(AppError::Validation(
                    "Player is already registered for this event".to_string(),
                ))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Registrations for an event, newest first. An unknown event yields an
    /// empty list, not an error.
    pub async fn list_registrations(&self, event_id: &str) -> Result<Vec<Registration>> {
        let registrations: Vec<Registration> = sqlx::query_as(
            "SELECT * FROM registrations
             WHERE event_id = ?
             ORDER BY registration_date DESC, rowid DESC",
        )
        .bind(event_id)
        .fetch_all(&*self.pool)
        .await?;

        Ok(registrations)
    }

    pub async fn count_registrations(&self, event_id: &str) -> Result<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM registrations WHERE event_id = ?")
                .bind(event_id)
                .fetch_one(&*self.pool)
                .await?;

        Ok(count)
    }

    async fn load_event(&self, event_id: &str) -> Result<Event> {
        let event: Event = sqlx::query_as("SELECT * FROM events WHERE id = ?")
            .bind(event_id)
            .fetch_optional(&*self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        Ok(event)
    }
}
