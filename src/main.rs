//! Biblio Server — catalog of authors, books, and publishers.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use biblio_core::config::AppConfig;
use biblio_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("BIBLIO_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
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
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Biblio v{}", env!("CARGO_PKG_VERSION"));

    // Database connection + migrations
    tracing::info!("Connecting to database...");
    let db = biblio_database::connection::DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    biblio_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    // Uploads directory
    tokio::fs::create_dir_all(&config.uploads.dir)
        .await
        .map_err(|e| {
            AppError::internal(format!(
                "Failed to create uploads dir '{}': {}",
                config.uploads.dir, e
            ))
        })?;

    // Repositories
    let author_repo = Arc::new(biblio_database::repositories::author::AuthorRepository::new(
        db.pool().clone(),
    ));
    let book_repo = Arc::new(biblio_database::repositories::book::BookRepository::new(
        db.pool().clone(),
    ));
    let publisher_repo = Arc::new(
        biblio_database::repositories::publisher::PublisherRepository::new(db.pool().clone()),
    );

    // Auth components
    let hasher = Arc::new(biblio_auth::password::PasswordHasher::new());
    let jwt_encoder = Arc::new(biblio_auth::jwt::encoder::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(biblio_auth::jwt::decoder::JwtDecoder::new(&config.auth));
    let guard = Arc::new(biblio_auth::guard::OwnershipGuard::new(&config.auth));

    // Services
    let author_service = Arc::new(biblio_service::author::AuthorService::new(
        Arc::clone(&author_repo),
        Arc::clone(&book_repo),
        Arc::clone(&hasher),
        Arc::clone(&jwt_encoder),
        Arc::clone(&guard),
        &config.auth,
    ));
    let book_service = Arc::new(biblio_service::book::BookService::new(
        Arc::clone(&book_repo),
        Arc::clone(&author_repo),
        Arc::clone(&publisher_repo),
    ));
    let publisher_service = Arc::new(biblio_service::publisher::PublisherService::new(
        Arc::clone(&publisher_repo),
        Arc::clone(&book_repo),
    ));
    let seed_service = Arc::new(biblio_service::seed::SeedService::new(
        Arc::clone(&author_repo),
        Arc::clone(&book_repo),
        Arc::clone(&publisher_repo),
        Arc::clone(&hasher),
    ));

    // HTTP server
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = biblio_api::state::AppState {
        config: Arc::new(config),
        db,
        jwt_decoder,
        author_service,
        book_service,
        publisher_service,
        seed_service,
    };

    let app = biblio_api::router::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Biblio server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Biblio server shut down gracefully");
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
