//! Backend entry-point: loads settings, prepares storage and serves the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use socialbuddy::inbound::http::health::HealthState;
use socialbuddy::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use socialbuddy::outbound::viacep::ViaCepAddressLookup;

use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;

    let lookup_url = Url::parse(settings.address_lookup_url())
        .map_err(|e| std::io::Error::other(format!("invalid address lookup URL: {e}")))?;
    let address_lookup = ViaCepAddressLookup::new(lookup_url, settings.address_lookup_timeout())
        .map_err(|e| std::io::Error::other(format!("address lookup client failed: {e}")))?;

    let mut config = ServerConfig::new(bind_addr).with_address_lookup(address_lookup);
    if let Some(database_url) = settings.database_url() {
        let applied = run_pending_migrations(database_url)
            .await
            .map_err(|e| std::io::Error::other(format!("migrations failed: {e}")))?;
        info!(applied, "database schema up to date");

        let pool_config = PoolConfig::new(database_url)
            .with_max_size(settings.db_max_connections())
            .with_connection_timeout(settings.db_connection_timeout());
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|e| std::io::Error::other(format!("database pool failed: {e}")))?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting HTTP server");
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
