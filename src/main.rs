use pickleball_server::{config, create_app, create_state, db, identity::NameResolver};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load config
    let config = config::Config::from_env();
    tracing::info!("Starting pickleball server on {}", config.server_addr());

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database connected");

    // Run migrations
    db::run_migrations(&pool).await?;

    // Build shared state
    let resolver = NameResolver::new(&config.resolver);
    let state = create_state(pool, resolver);

    // Seed demo events so the listing is never empty on a fresh database
    if config.seed_demo_events {
        state.events.seed_demo_events().await?;
    }

    // Build router using lib function
    let app = create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.server_addr()).await?;
    tracing::info!("Server listening on {}", config.server_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
