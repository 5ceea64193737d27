use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use ampsite_core::roles::UserRole;
use ampsite_db::repositories::RoleRepo;
use ampsite_events::{EventBus, EventPersistence, ReminderForwarder, WebhookDelivery};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ampsite_api::background::reminder_sweep;
use ampsite_api::config::ServerConfig;
use ampsite_api::router::build_app_router;
use ampsite_api::state::AppState;

/// Principal recorded as the assigner of the bootstrap admin role.
const BOOTSTRAP_ASSIGNER: &str = "system";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ampsite_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = ampsite_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    ampsite_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    ampsite_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database ready, migrations applied");

    if let Some(admin) = &config.bootstrap_admin {
        RoleRepo::assign(&pool, admin, UserRole::Admin, BOOTSTRAP_ASSIGNER)
            .await
            .expect("Failed to assign bootstrap admin role");
        tracing::info!(principal = %admin, "Bootstrap admin role assigned");
    }

    // --- Event bus ---
    let event_bus = Arc::new(EventBus::default());

    let persistence_handle = tokio::spawn(EventPersistence::run(pool.clone(), event_bus.subscribe()));

    let forwarder_handle = match &config.reminder_webhook_url {
        Some(url) => {
            let delivery = WebhookDelivery::new().expect("Failed to build webhook HTTP client");
            let forwarder = ReminderForwarder::new(url.clone(), delivery);
            tracing::info!(url = %url, "Reminder webhook forwarding enabled");
            Some(tokio::spawn(forwarder.run(event_bus.subscribe())))
        }
        None => None,
    };

    // --- Reminder sweep ---
    let sweep_cancel = CancellationToken::new();
    let sweep_handle = tokio::spawn(reminder_sweep::run(
        pool.clone(),
        Arc::clone(&event_bus),
        config.reminder_sweep_interval,
        sweep_cancel.clone(),
    ));

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus: Arc::clone(&event_bus),
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    sweep_cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), sweep_handle).await;

    // Dropping the last sender closes the channel and stops the subscribers.
    drop(event_bus);
    let _ = tokio::time::timeout(Duration::from_secs(5), persistence_handle).await;
    if let Some(handle) = forwarder_handle {
        let _ = tokio::time::timeout(Duration::from_secs(5), handle).await;
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
