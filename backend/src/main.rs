//! Temple backend entry point.

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use temple_backend::inbound::http::health::HealthState;
use temple_backend::inbound::http::session_config::{BuildMode, session_settings_from_env};
use temple_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
#[cfg(feature = "metrics")]
use temple_backend::server::make_metrics;
use temple_backend::server::{ServerConfig, create_server};
use temple_backend::settings::AppSettings;

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }

    let settings = AppSettings::load().wrap_err("load TEMPLE_* settings")?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .wrap_err("configure session cookies")?;

    let mut config = ServerConfig::new(
        session,
        settings.session_ttl()?,
        settings.bind_addr()?,
        settings.messages()?,
    );

    match settings.database_url() {
        Some(url) => {
            run_pending_migrations(url)
                .await
                .wrap_err("apply database migrations")?;
            let pool = DbPool::new(
                PoolConfig::new(url).with_max_size(settings.db_max_connections()),
            )
            .await
            .wrap_err("build database pool")?;
            config = config.with_db_pool(pool);
        }
        None => warn!("TEMPLE_DATABASE_URL is unset; data lives in memory and is lost on restart"),
    }

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(make_metrics()?));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    server.await?;

    health_state.mark_unhealthy();
    info!("server stopped");
    Ok(())
}
