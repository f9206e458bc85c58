//! Payment charge stub.
//!
//! A charge correlates an eventual registration with an entry-fee amount.
//! There is no settlement path yet: every charge is recorded with status
//! "pending" and stays there. Store failures surface to the caller; a
//! charge id is never fabricated.

use crate::{
    audit,
    db::models::Charge,
    db::DbPool,
    error::{AppError, Result},
};
use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct NewCharge {
    pub amount: f64,
    pub recipient_address: String,
    pub recipient_name: String,
    pub event_id: String,
    pub dupr_id: String,
    pub dupr_rating: f64,
}

pub struct ChargeService {
    pool: Arc<DbPool>,
}

impl ChargeService {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    pub async fn create_charge(&self, input: NewCharge) -> Result<Charge> {
        if !input.amount.is_finite() || input.amount < 0.0 {
            return Err(AppError::Validation(
                "Charge amount must be non-negative".to_string(),
            ));
        }

        let charge = Charge {
            id: generate_charge_id(),
            event_id: input.event_id,
            recipient_address: input.recipient_address,
            recipient_name: input.recipient_name,
            dupr_id: input.dupr_id,
            dupr_rating: input.dupr_rating,
            amount: input.amount,
            status: "pending".to_string(),
            created_at: Utc::now().to_rfc3339(),
        };

        sqlx::query(
            "INSERT INTO charges (
                 id, event_id, recipient_address, recipient_name, dupr_id,
                 dupr_rating, amount, status, created_at
             ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&charge.id)
        .bind(&charge.event_id)
        .bind(&charge.recipient_address)
        .bind(&charge.recipient_name)
        .bind(&charge.dupr_id)
        .bind(charge.dupr_rating)
        .bind(charge.amount)
        .bind(&charge.status)
        .bind(&charge.created_at)
        .execute(&*self.pool)
        .await?;

        audit::log_charge_created(&charge.id, &charge.event_id, charge.amount);

        Ok(charge)
    }
}

/// Charge ids follow the `chr_<unix-millis>_<random>` shape.
fn generate_charge_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();

    format!(
        "chr_{}_{}",
        Utc::now().timestamp_millis(),
        suffix.to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_id_shape() {
        let id = generate_charge_id();
        let mut parts = id.splitn(3, '_');

        assert_eq!(parts.next(), Some("chr"));
        assert!(parts.next().unwrap().parse::<i64>().is_ok());
        assert_eq!(parts.next().unwrap().len(), 6);
    }
}
