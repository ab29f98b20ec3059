//! ems-api - Employee Management HTTP service
//!
//! Startup sequence:
//! 1. Parse command line / environment
//! 2. Load and validate configuration
//! 3. Initialize tracing and log build identification
//! 4. Bootstrap the database (fatal on failure)
//! 5. Serve until Ctrl+C / SIGTERM

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ems_api::{build_router, AppState};
use ems_common::config::{ConfigOverrides, ServiceConfig};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for ems-api
#[derive(Parser, Debug)]
#[command(name = "ems-api")]
#[command(about = "Employee Management HTTP service")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "EMS_CONFIG")]
    config: Option<PathBuf>,

    /// Host to listen on
    #[arg(long, env = "EMS_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "EMS_PORT")]
    port: Option<u16>,

    /// SQLite database file
    #[arg(short, long, env = "EMS_DATABASE_PATH")]
    database: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "EMS_LOG_LEVEL")]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            database_path: self.database.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServiceConfig::load(args.config.as_deref())?;
    args.overrides().apply(&mut config);
    config.validate()?;

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                let level = &config.logging.level;
                format!("ems_api={level},ems_common={level},tower_http={level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Employee Management API (ems-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Configuration: {:?}", config);
    info!("Database path: {}", config.database.path.display());

    // Must not serve against a table that may not exist
    let pool = match ems_common::db::init_database(&config.database).await {
        Ok(pool) => {
            info!("✓ Database initialized");
            pool
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(e).context("Database bootstrap failed");
        }
    };

    let app = build_router(AppState::new(pool.clone()));

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_address))?;
    info!("ems-api listening on http://{}", bind_address);
    info!("Health check: http://{}/health", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ENV_VARS: [&str; 5] = [
        "EMS_CONFIG",
        "EMS_HOST",
        "EMS_PORT",
        "EMS_DATABASE_PATH",
        "EMS_LOG_LEVEL",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_no_args_leaves_config_untouched() {
        clear_env();
        let args = Args::try_parse_from(["ems-api"]).unwrap();

        let mut config = ServiceConfig::default();
        args.overrides().apply(&mut config);
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    #[serial]
    fn test_cli_flags() {
        clear_env();
        let args = Args::try_parse_from([
            "ems-api",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--database",
            "/tmp/ems.db",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let mut config = ServiceConfig::default();
        args.overrides().apply(&mut config);
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.database.path, PathBuf::from("/tmp/ems.db"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    #[serial]
    fn test_env_vars_used_when_flags_absent() {
        clear_env();
        std::env::set_var("EMS_PORT", "9100");
        std::env::set_var("EMS_DATABASE_PATH", "/tmp/ems-env.db");

        let args = Args::try_parse_from(["ems-api"]).unwrap();
        clear_env();

        assert_eq!(args.port, Some(9100));
        assert_eq!(args.database, Some(PathBuf::from("/tmp/ems-env.db")));
    }

    #[test]
    #[serial]
    fn test_flag_beats_env_var() {
        clear_env();
        std::env::set_var("EMS_PORT", "9100");

        let args = Args::try_parse_from(["ems-api", "--port", "9200"]).unwrap();
        clear_env();

        assert_eq!(args.port, Some(9200));
    }

    #[test]
    #[serial]
    fn test_invalid_port_rejected() {
        clear_env();
        assert!(Args::try_parse_from(["ems-api", "--port", "not-a-port"]).is_err());
    }
}
