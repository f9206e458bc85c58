//! Structured audit logging for registration-relevant events.
//!
//! Event creation, registration outcomes, and charge creation are logged
//! using tracing spans for structured output.

/// Log a newly created event
pub fn log_event_created(event_id: &str, name: &str, created_by: &str) {
    tracing::info!(
        target: "audit",
        event = "event_created",
        event_id = event_id,
        name = name,
        created_by = created_by,
        "Event created: {} ({}) by {}",
        name,
        event_id,
        created_by
    );
}

/// Log an accepted registration
pub fn log_registration_accepted(event_id: &str, player_address: &str, dupr_rating: f64) {
    tracing::info!(
        target: "audit",
        event = "registration_accepted",
        event_id = event_id,
        player_address = player_address,
        dupr_rating = dupr_rating,
        "Registration accepted: {} for event {}",
        player_address,
        event_id
    );
}

/// Log a rejected registration attempt
pub fn log_registration_rejected(event_id: &str, player_address: &str, reason: &str) {
    tracing::warn!(
        target: "audit",
        event = "registration_rejected",
        event_id = event_id,
        player_address = player_address,
        reason = reason,
        "Registration rejected: {} for event {} - {}",
        player_address,
        event_id,
        reason
    );
}

/// Log a created charge
pub fn log_charge_created(charge_id: &str, event_id: &str, amount: f64) {
    tracing::info!(
        target: "audit",
        event = "charge_created",
        charge_id = charge_id,
        event_id = event_id,
        amount = amount,
        "Charge {} created for event {} (amount {})",
        charge_id,
        event_id,
        amount
    );
}
