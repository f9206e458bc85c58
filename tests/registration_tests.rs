//! Integration tests for the registration ledger and event store.
//!
//! These tests drive the storage services directly to verify the capacity
//! invariant, rejection semantics, and roster ordering.

use pickleball_server::{
    create_test_db,
    error::AppError,
    events::{EventStore, NewEvent},
    registration::{NewRegistration, RegistrationLedger},
};
use std::sync::Arc;
use std::time::Duration;

const ORGANIZER: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

async fn setup() -> (Arc<EventStore>, Arc<RegistrationLedger>) {
    let pool = Arc::new(create_test_db().await);
    let store = Arc::new(EventStore::new(pool.clone()));
    let ledger = Arc::new(RegistrationLedger::new(pool));
    (store, ledger)
}

fn new_event(max_participants: i32) -> NewEvent {
    NewEvent {
        name: "Test Round Robin".to_string(),
        event_type: "roundRobin".to_string(),
        format: "doubles".to_string(),
        skill_level: "3.0-3.5".to_string(),
        event_date: "2026-09-01".to_string(),
        start_time: "09:00".to_string(),
        end_time: "13:00".to_string(),
        registration_deadline: "2026-08-25".to_string(),
        min_rating: 3.0,
        max_rating: 4.0,
        entry_fee_usdc: 40.0,
        max_participants,
        location: "Test Courts".to_string(),
        description: None,
        image_url: None,
        created_by: ORGANIZER.to_string(),
    }
}

fn new_registration(event_id: &str, player_address: &str, dupr_rating: f64) -> NewRegistration {
    NewRegistration {
        event_id: event_id.to_string(),
        player_address: player_address.to_string(),
        player_name: "Test Player".to_string(),
        dupr_id: "DUPR123".to_string(),
        dupr_rating,
    }
}

/// Distinct well-formed address per player index.
fn player_address(index: usize) -> String {
    format!("0x{:040x}", index + 1)
}

// ============================================================================
// Capacity Invariant Tests
// ============================================================================

#[tokio::test]
async fn test_capacity_enforced_sequentially() {
    let (store, ledger) = setup().await;
    let event = store.create_event(new_event(2)).await.unwrap();

    // Two players fit
    ledger
        .register(new_registration(&event.id, &player_address(0), 3.5))
        .await
        .unwrap();
    assert_eq!(ledger.count_registrations(&event.id).await.unwrap(), 1);

    ledger
        .register(new_registration(&event.id, &player_address(1), 3.5))
        .await
        .unwrap();
    assert_eq!(ledger.count_registrations(&event.id).await.unwrap(), 2);

    // The third is rejected and the count is unchanged
    let err = ledger
        .register(new_registration(&event.id, &player_address(2), 3.5))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::CapacityExceeded(_)));
    assert_eq!(ledger.count_registrations(&event.id).await.unwrap(), 2);
}

#[tokio::test]
async fn test_capacity_enforced_under_concurrency() {
    let (store, ledger) = setup().await;
    let event = store.create_event(new_event(3)).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..10 {
        let ledger = ledger.clone();
        let event_id = event.id.clone();
        handles.push(tokio::spawn(async move {
            ledger
                .register(new_registration(&event_id, &player_address(i), 3.5))
                .await
        }));
    }

    let mut accepted = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => accepted += 1,
            Err(AppError::CapacityExceeded(_)) => rejected += 1,
            Err(e) => panic!("Unexpected error: {:?}", e),
        }
    }

    assert_eq!(accepted, 3);
    assert_eq!(rejected, 7);
    assert_eq!(ledger.count_registrations(&event.id).await.unwrap(), 3);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
async fn test_rating_out_of_band_rejected_without_side_effect() {
    let (store, ledger) = setup().await;
    let event = store.create_event(new_event(2)).await.unwrap();

    for _ in 0..2 {
        let err = ledger
            .register(new_registration(&event.id, &player_address(0), 2.0))
            .await
            .unwrap_err();

        // The message carries the valid band for the user-facing error
        match err {
            AppError::Validation(msg) => assert!(msg.contains("3.0-4.0")),
            other => panic!("Unexpected error: {:?}", other),
        }
        assert_eq!(ledger.count_registrations(&event.id).await.unwrap(), 0);
    }

    // A rating above the band is rejected the same way
    let err = ledger
        .register(new_registration(&event.id, &player_address(0), 4.5))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_boundary_ratings_accepted() {
    let (store, ledger) = setup().await;
    let event = store.create_event(new_event(4)).await.unwrap();

    ledger
        .register(new_registration(&event.id, &player_address(0), 3.0))
        .await
        .unwrap();
    ledger
        .register(new_registration(&event.id, &player_address(1), 4.0))
        .await
        .unwrap();

    assert_eq!(ledger.count_registrations(&event.id).await.unwrap(), 2);
}

#[tokio::test]
async fn test_malformed_address_rejected() {
    let (store, ledger) = setup().await;
    let event = store.create_event(new_event(2)).await.unwrap();

    let err = ledger
        .register(new_registration(&event.id, "not-an-address", 3.5))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(ledger.count_registrations(&event.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_duplicate_registration_rejected() {
    let (store, ledger) = setup().await;
    let event = store.create_event(new_event(8)).await.unwrap();

    ledger
        .register(new_registration(&event.id, &player_address(0), 3.5))
        .await
        .unwrap();

    let err = ledger
        .register(new_registration(&event.id, &player_address(0), 3.5))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(ledger.count_registrations(&event.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_register_unknown_event() {
    let (_store, ledger) = setup().await;

    let err = ledger
        .register(new_registration("does-not-exist", &player_address(0), 3.5))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

// ============================================================================
// Roster Tests
// ============================================================================

#[tokio::test]
async fn test_list_registrations_newest_first() {
    let (store, ledger) = setup().await;
    let event = store.create_event(new_event(8)).await.unwrap();

    let mut inserted = Vec::new();
    for i in 0..3 {
        let registration = ledger
            .register(new_registration(&event.id, &player_address(i), 3.5))
            .await
            .unwrap();
        inserted.push(registration.id);
        // Keep registration timestamps strictly increasing
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let roster = ledger.list_registrations(&event.id).await.unwrap();
    let ids: Vec<&str> = roster.iter().map(|r| r.id.as_str()).collect();

    assert_eq!(
        ids,
        vec![
            inserted[2].as_str(),
            inserted[1].as_str(),
            inserted[0].as_str()
        ]
    );
}

#[tokio::test]
async fn test_list_registrations_unknown_event_is_empty() {
    let (_store, ledger) = setup().await;

    let roster = ledger.list_registrations("does-not-exist").await.unwrap();
    assert!(roster.is_empty());
    assert_eq!(
        ledger.count_registrations("does-not-exist").await.unwrap(),
        0
    );
}

// ============================================================================
// Event Store Tests
// ============================================================================

#[tokio::test]
async fn test_event_store_crud() {
    let (store, _ledger) = setup().await;

    let created = store.create_event(new_event(16)).await.unwrap();
    let fetched = store.get_event(&created.id).await.unwrap();
    assert_eq!(fetched.name, created.name);
    assert_eq!(fetched.max_participants, 16);
    assert_eq!(fetched.seed_participants, 0);

    let err = store.get_event("does-not-exist").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_seeded_events_listed_with_user_events() {
    let (store, ledger) = setup().await;

    store.seed_demo_events().await.unwrap();
    // Seeding twice is harmless
    store.seed_demo_events().await.unwrap();

    let created = store.create_event(new_event(16)).await.unwrap();

    let events = store.list_events().await.unwrap();
    assert_eq!(events.len(), 9);
    assert_eq!(events.last().unwrap().id, created.id);

    // A demo event reports its seeded count until the ledger has rows
    let demo = store.get_event("1").await.unwrap();
    let count = ledger.count_registrations("1").await.unwrap();
    assert_eq!(demo.current_participants(count), 16);

    let registration = ledger
        .register(new_registration("1", &player_address(0), 5.0))
        .await
        .unwrap();
    assert_eq!(registration.event_id, "1");

    // Once a real registration exists, the ledger is the source of truth
    let count = ledger.count_registrations("1").await.unwrap();
    assert_eq!(demo.current_participants(count), 1);
}
