//! JobTrail Server — job application tracking and reminders
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tokio::sync::watch;
use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use jobtrail_core::config::AppConfig;
use jobtrail_core::error::AppError;
use jobtrail_database::repositories::{
    ApplicationRepository, NotificationRepository, UserRepository,
};
use jobtrail_database::store::{ApplicationStore, NotificationStore, UserStore};
use jobtrail_mailer::{EmailDispatcher, SmtpMailTransport};
use jobtrail_service::ReminderEngine;
use jobtrail_worker::CronScheduler;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("JOBTRAIL_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting JobTrail v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db_pool = jobtrail_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    jobtrail_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Email dispatcher ─────────────────────────────────
    let dispatcher = if config.email.enabled {
        tracing::info!("Initializing email dispatcher...");
        let transport = Arc::new(SmtpMailTransport::new(&config.email)?);
        Some(Arc::new(EmailDispatcher::new(transport, &config.email)?))
    } else {
        tracing::info!("Outbound email disabled");
        None
    };

    // ── Step 3: Shutdown channel ─────────────────────────────────
    let (shutdown_tx, _shutdown_rx) = watch::channel(false);

    // ── Step 4: Start background scheduler ───────────────────────
    let scheduler = if config.worker.enabled {
        tracing::info!("Starting background scheduler...");

        let applications: Arc<dyn ApplicationStore> =
            Arc::new(ApplicationRepository::new(db_pool.clone()));
        let notifications: Arc<dyn NotificationStore> =
            Arc::new(NotificationRepository::new(db_pool.clone()));
        let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(db_pool.clone()));

        let engine = Arc::new(ReminderEngine::new(
            applications,
            Arc::clone(&notifications),
            users,
            dispatcher,
            config.worker.scan_concurrency,
        ));

        let scheduler = CronScheduler::new(engine, notifications, config.worker.clone()).await?;
        scheduler.register_default_tasks().await?;
        scheduler.start().await?;

        tracing::info!("Background scheduler started");
        Some(scheduler)
    } else {
        tracing::info!("Background scheduler disabled");
        None
    };

    // ── Step 5: Build and start HTTP server ──────────────────────
    tracing::info!(
        "Starting HTTP server on {}:{}...",
        config.server.host,
        config.server.port
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app_state = jobtrail_api::AppState::new(Arc::new(config), db_pool);
    let app = jobtrail_api::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("JobTrail server listening on {}", addr);

    // ── Step 6: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    if let Some(mut scheduler) = scheduler {
        scheduler.shutdown().await?;
    }

    tracing::info!("JobTrail server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
