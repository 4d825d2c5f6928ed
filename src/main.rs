use anyhow::Result;
use catalog_core::application::{ports::time::Clock, services::ApplicationServices};
use catalog_core::config::AppConfig;
use catalog_core::domain::{
    category::{CategoryReadRepository, CategoryWriteRepository},
    product::{ProductReadRepository, ProductWriteRepository},
    slug::SlugGenerator,
};
use catalog_core::infrastructure::{
    database,
    repositories::{
        PostgresCategoryReadRepository, PostgresCategoryWriteRepository,
        PostgresProductReadRepository, PostgresProductWriteRepository,
    },
    time::SystemClock,
};
use catalog_core::presentation::http::{routes::build_router, state::HttpState};
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

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let category_write_repo: Arc<dyn CategoryWriteRepository> =
        Arc::new(PostgresCategoryWriteRepository::new(pool.clone()));
    let category_read_repo: Arc<dyn CategoryReadRepository> =
        Arc::new(PostgresCategoryReadRepository::new(pool.clone()));
    let product_write_repo: Arc<dyn ProductWriteRepository> =
        Arc::new(PostgresProductWriteRepository::new(pool.clone()));
    let product_read_repo: Arc<dyn ProductReadRepository> =
        Arc::new(PostgresProductReadRepository::new(pool.clone()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger = Arc::new(SlugGenerator::new(config.slug_options()));
    tracing::debug!(options = ?config.slug_options(), "slug generator configured");

    let services = Arc::new(ApplicationServices::new(
        category_write_repo,
        category_read_repo,
        product_write_repo,
        product_read_repo,
        clock,
        slugger,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

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
