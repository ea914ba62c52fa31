use std::sync::Arc;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use covid_portal::db::PortalStorage;
use covid_portal::router::PortalState;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &covid_portal::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        bind_addr = %cfg.bind_addr,
        loglevel = %cfg.loglevel
    );

    // The portal is useless without its database; bail out before binding.
    let storage = match PortalStorage::connect(&cfg.database_url).await {
        Ok(storage) => storage,
        Err(e) => {
            error!(database_url = %cfg.database_url, error = %e, "failed to open database");
            std::process::exit(1);
        }
    };

    let state = PortalState::new(
        storage,
        Arc::from(cfg.jwt_secret.as_str()),
        cfg.token_ttl_days,
    );
    let app = covid_portal::router::portal_router(state);

    let listener = TcpListener::bind(&cfg.bind_addr).await?;
    info!("HTTP server listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
