use anyhow::Result;
use league_errors::application::{
    ports::{error_log::ErrorLog, security::TokenManager, time::Clock},
    services::ApplicationServices,
};
use league_errors::config::AppConfig;
use league_errors::domain::player::PlayerRepository;
use league_errors::infrastructure::{
    logging::{TracingErrorLog, init_tracing},
    repositories::InMemoryPlayerRepository,
    security::JwtTokenManager,
    time::SystemClock,
};
use league_errors::presentation::http::{
    middleware::ErrorHandler, routes::build_router, state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let player_repo: Arc<dyn PlayerRepository> = Arc::new(InMemoryPlayerRepository::new());
    let token_manager: Arc<dyn TokenManager> = Arc::new(JwtTokenManager::new(
        config.jwt_secret(),
        config.token_ttl(),
        Arc::clone(&clock),
    ));

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&player_repo),
        Arc::clone(&token_manager),
        Arc::clone(&clock),
    ));

    let error_log: Arc<dyn ErrorLog> = Arc::new(TracingErrorLog);
    let errors = ErrorHandler::new(config.development_mode(), error_log, Arc::clone(&clock));
    if errors.development_mode() {
        tracing::warn!("development mode: error responses include stack traces");
    }

    let state = HttpState { services };
    let app = build_router(state, errors);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(environment = config.environment(), "listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
