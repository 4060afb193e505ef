//! Course Desk entry-point: loads settings, prepares the store, and serves.

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use coursedesk::config::AppSettings;
use coursedesk::inbound::http::health::HealthState;
use coursedesk::inbound::http::session_config::{BuildMode, session_settings_from_env};
use coursedesk::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use coursedesk::outbound::security::BcryptPasswordHasher;
use coursedesk::server::{ServerConfig, create_server, drain_on};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().wrap_err("failed to load settings")?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .wrap_err("invalid session configuration")?;
    let bind_addr = settings
        .bind_addr()
        .wrap_err("COURSEDESK_BIND_ADDR is not a socket address")?;

    let mut config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        bind_addr,
    )
    .with_password_hasher(BcryptPasswordHasher::new(settings.bcrypt_cost()));

    if settings.in_memory {
        warn!("using in-memory store; data is lost on exit");
    } else {
        let database_path = settings.database_path();
        let applied = run_migrations(database_path)
            .wrap_err_with(|| format!("failed to migrate {database_path}"))?;
        info!(database_path, applied, "database ready");
        let pool = DbPool::new(PoolConfig::new(database_path))
            .await
            .wrap_err("failed to open database pool")?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on(health_state, server.handle(), shutdown_signal()));
    server.await?;
    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM where the platform has it.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = terminate.recv() => {}
                }
                return;
            }
            Err(error) => warn!(%error, "SIGTERM handler unavailable; waiting for Ctrl-C"),
        }
    }

    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "Ctrl-C handler unavailable; draining now");
    }
}
