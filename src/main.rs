use user_directory::application::{
    ports::{ClockPort, DirectorySourcePort},
    services::DirectoryServices,
};
use user_directory::config::AppConfig;
use user_directory::domain::{directory::QueryFilter, favorite::FavoriteStore};
use user_directory::infrastructure::{
    database, remote::HttpDirectorySource, repositories::SqliteFavoriteStore, time::SystemClock,
};
use user_directory::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let favorite_store: Arc<dyn FavoriteStore> =
        Arc::new(SqliteFavoriteStore::new(Arc::clone(&pool)).await?);
    let source: Arc<DirectorySourcePort> = Arc::new(HttpDirectorySource::new(
        config.directory_api_url(),
        config.request_timeout(),
    )?);
    let clock: Arc<ClockPort> = Arc::new(SystemClock);

    let services = Arc::new(DirectoryServices::new(
        source,
        favorite_store,
        clock,
        config.page_size(),
    )?);

    let initial = Arc::clone(&services);
    tokio::spawn(async move {
        let transition = initial.refresh(QueryFilter::unfiltered()).await;
        tracing::info!(?transition, "initial directory load finished");
    });

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    services.shutdown();
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
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
