//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use catale_common::{AppConfig, AppError, JwtService};
use catale_db::{
    create_pool, run_migrations, PgCocktailRepository, PgDiaryRepository, PgLikeRepository,
    PgMemberRepository, PgReviewRepository,
};
use catale_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// # Errors
/// Returns `AppError::Config` for an unusable rate limit configuration
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let api = apply_rate_limit(create_router(), &config.rate_limit)?;
    let router = health_routes().merge(api);
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());

    Ok(router.with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = catale_db::DatabaseConfig::new(
        config.database.url.clone(),
        config.database.max_connections,
        config.database.min_connections,
    );
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        info!("Applying database migrations...");
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        info!("Database migrations applied");
    }

    let jwt_service = Arc::new(JwtService::from_config(&config.jwt));

    let service_context = ServiceContext::builder()
        .cocktail_repo(Arc::new(PgCocktailRepository::new(pool.clone())))
        .like_repo(Arc::new(PgLikeRepository::new(pool.clone())))
        .review_repo(Arc::new(PgReviewRepository::new(pool.clone())))
        .member_repo(Arc::new(PgMemberRepository::new(pool.clone())))
        .diary_repo(Arc::new(PgDiaryRepository::new(pool.clone())))
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, pool, config))
}

/// Serve the application on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read listener address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API_HOST/API_PORT: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
