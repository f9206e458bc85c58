use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ============================================================================
// Event Labels
// ============================================================================

/// Competition style label. Carries no scheduling behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    RoundRobin,
    Bracket,
    Ladder,
    Social,
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::RoundRobin => "roundRobin",
            EventType::Bracket => "bracket",
            EventType::Ladder => "ladder",
            EventType::Social => "social",
        }
    }
}

impl std::str::FromStr for EventType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "roundRobin" => Ok(EventType::RoundRobin),
            "bracket" => Ok(EventType::Bracket),
            "ladder" => Ok(EventType::Ladder),
            "social" => Ok(EventType::Social),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventFormat {
    Singles,
    Doubles,
    Mixed,
}

impl EventFormat {
    pub fn as_str(&self) -> &str {
        match self {
            EventFormat::Singles => "singles",
            EventFormat::Doubles => "doubles",
            EventFormat::Mixed => "mixed",
        }
    }
}

impl std::str::FromStr for EventFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "singles" => Ok(EventFormat::Singles),
            "doubles" => Ok(EventFormat::Doubles),
            "mixed" => Ok(EventFormat::Mixed),
            _ => Err(()),
        }
    }
}

/// Fixed rating-range bands shown on event listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,     // 2.5-3.0
    Intermediate, // 3.0-3.5
    Advanced,     // 3.5-4.0
    Expert,       // 4.0-4.5
    Pro,          // 4.5+
}

impl SkillLevel {
    pub fn as_str(&self) -> &str {
        match self {
            SkillLevel::Beginner => "2.5-3.0",
            SkillLevel::Intermediate => "3.0-3.5",
            SkillLevel::Advanced => "3.5-4.0",
            SkillLevel::Expert => "4.0-4.5",
            SkillLevel::Pro => "4.5+",
        }
    }
}

impl std::str::FromStr for SkillLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2.5-3.0" => Ok(SkillLevel::Beginner),
            "3.0-3.5" => Ok(SkillLevel::Intermediate),
            "3.5-4.0" => Ok(SkillLevel::Advanced),
            "4.0-4.5" => Ok(SkillLevel::Expert),
            "4.5+" => Ok(SkillLevel::Pro),
            _ => Err(()),
        }
    }
}

// ============================================================================
// Stored Records
// ============================================================================

/// An event as stored in the catalog.
///
/// `seed_participants` is a display-only baseline carried by demo events.
/// The live participant count is always derived from the registration
/// ledger; see [`Event::current_participants`].
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: String,
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
    pub seed_participants: i32,
    pub location: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_by: String,
    pub created_at: String,
}

impl Event {
    /// Live participant count for display. The seeded baseline only stands
    /// in until the first real registration is recorded for the event.
    pub fn current_participants(&self, ledger_count: i64) -> i32 {
        if ledger_count > 0 {
            ledger_count as i32
        } else {
            self.seed_participants
        }
    }

    /// Human-readable rating band, e.g. "3.0-4.0".
    pub fn rating_band(&self) -> String {
        format!("{:.1}-{:.1}", self.min_rating, self.max_rating)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registration {
    pub id: String,
    pub event_id: String,
    pub player_address: String,
    pub player_name: String,
    pub dupr_id: String,
    pub dupr_rating: f64,
    pub registration_date: String,
    pub status: String,
}

impl Registration {
    pub fn new(
        event_id: String,
        player_address: String,
        player_name: String,
        dupr_id: String,
        dupr_rating: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            player_address,
            player_name,
            dupr_id,
            dupr_rating,
            registration_date: Utc::now().to_rfc3339(),
            status: "pending".to_string(),
        }
    }
}

/// A payment charge stub. No settlement path exists; charges stay "pending".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Charge {
    pub id: String,
    pub event_id: String,
    pub recipient_address: String,
    pub recipient_name: String,
    pub dupr_id: String,
    pub dupr_rating: f64,
    pub amount: f64,
    pub status: String,
    pub created_at: String,
}
