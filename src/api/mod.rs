pub mod charges;
pub mod events;
pub mod registrations;

pub use charges::router as charges_router;
pub use events::router as events_router;
pub use registrations::router as registrations_router;

use crate::{
    events::EventStore, identity::NameResolver, payments::ChargeService,
    registration::RegistrationLedger,
};
use std::sync::Arc;

/// Shared state for all API routers.
pub struct AppState {
    pub events: Arc<EventStore>,
    pub ledger: Arc<RegistrationLedger>,
    pub resolver: Arc<NameResolver>,
    pub charges: Arc<ChargeService>,
}
