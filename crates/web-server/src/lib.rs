use axum::{extract::DefaultBodyLimit, routing::get, Router};
use configuration::Settings;
use database::PersonaRepository;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod session;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub db_repo: PersonaRepository,
}

/// Builds the application router around an already migrated repository.
pub fn build_router(db_repo: PersonaRepository, body_limit: usize) -> Router {
    let app_state = Arc::new(AppState { db_repo });

    // Any origin, method and header, with credentials. Wildcards cannot be
    // combined with credentials, so the request's own values are echoed back.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            "/personas",
            get(handlers::get_personas).post(handlers::create_persona),
        )
        .route(
            "/personas/:persona_id",
            get(handlers::get_persona)
                .put(handlers::update_persona)
                .delete(handlers::delete_persona),
        )
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(body_limit))
}

/// Connects to the database, applies migrations and serves HTTP until a
/// shutdown signal arrives.
pub async fn run_server(settings: &Settings) -> anyhow::Result<()> {
    let db_pool = database::connect(&settings.database).await?;
    database::run_migrations(&db_pool).await?;
    let db_repo = PersonaRepository::new(db_pool.clone());

    let app = build_router(db_repo, settings.server.body_limit);
    let addr = settings.server.socket_addr();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_pool.close().await;
    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C.");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM.");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received, draining connections.");
}
