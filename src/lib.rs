//! Pickleball League Server Library
//!
//! This module exposes the server components for integration testing.

pub mod api;
pub mod audit;
pub mod config;
pub mod db;
pub mod error;
pub mod events;
pub mod identity;
pub mod payments;
pub mod registration;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Creates the application router with all endpoints
pub fn create_app(state: Arc<api::AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(|| async { "Pickleball League Server" }))
        .route("/health", get(|| async { "OK" }))
        .nest(
            "/api/events",
            api::events_router().with_state(state.clone()),
        )
        .nest(
            "/api/registrations",
            api::registrations_router().with_state(state.clone()),
        )
        .nest("/api/charges", api::charges_router().with_state(state))
        .layer(cors)
}

/// Builds the shared application state from a database pool and resolver.
pub fn create_state(
    pool: db::DbPool,
    resolver: identity::NameResolver,
) -> Arc<api::AppState> {
    let pool = Arc::new(pool);

    Arc::new(api::AppState {
        events: Arc::new(events::EventStore::new(pool.clone())),
        ledger: Arc::new(registration::RegistrationLedger::new(pool.clone())),
        resolver: Arc::new(resolver),
        charges: Arc::new(payments::ChargeService::new(pool)),
    })
}

/// Test helper to create an in-memory database and run migrations.
///
/// A single pooled connection keeps every query on the same in-memory
/// database.
pub async fn create_test_db() -> db::DbPool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Test helper to create a fully configured test app.
///
/// The name resolver points at an unreachable endpoint, so only raw wallet
/// addresses resolve during tests.
pub async fn create_test_app() -> (Router, Arc<api::AppState>) {
    let pool = create_test_db().await;

    let resolver = identity::NameResolver::new(&config::ResolverConfig {
        ens_endpoint: "http://127.0.0.1:9/ens/resolve".to_string(),
        profile_endpoint: "http://127.0.0.1:9/profile".to_string(),
        timeout_secs: 1,
    });

    let state = create_state(pool, resolver);
    let app = create_app(state.clone());
    (app, state)
}
