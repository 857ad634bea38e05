//! Prereg Service - Main Entry Point
//! JSON-RPC server over the customer store and the attendance queue

mod config;

use anyhow::{Context, Result};
use config::{DaemonConfig, LogFormat};
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import workspace crates
use prereg_api_rpc::{RpcHandler, RpcServer, RpcServerConfig};
use prereg_core::application::{
    AttendanceService, BusinessCustomerService, IndividualCustomerService,
};
use prereg_core::domain::AttendanceQueue;
use prereg_core::port::time_provider::SystemTimeProvider;
use prereg_infra_sqlite::{
    create_pool, run_migrations, SqliteBusinessRepository, SqliteIndividualRepository,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = DaemonConfig::from_env().context("Invalid configuration")?;

    // 2. Initialize logging (guard flushes the file writer on exit)
    let _log_guard = init_logging(&config);

    info!("Prereg service v{} starting...", VERSION);
    info!(
        db_path = %config.db_path,
        queue_capacity = config.queue_capacity,
        "Initializing database..."
    );

    // 3. Initialize database
    let pool = create_pool(&config.db_path)
        .await
        .context("DB pool creation failed")?;
    run_migrations(&pool).await.context("Migration failed")?;

    // 4. Setup dependencies (DI wiring)
    let queue = Arc::new(
        AttendanceQueue::new(config.queue_capacity).context("Invalid queue capacity")?,
    );
    let time_provider = Arc::new(SystemTimeProvider);
    let individual_repo = Arc::new(SqliteIndividualRepository::new(pool.clone()));
    let business_repo = Arc::new(SqliteBusinessRepository::new(pool.clone()));

    let handler = RpcHandler::new(
        Arc::new(IndividualCustomerService::new(
            individual_repo.clone(),
            queue.clone(),
            time_provider.clone(),
        )),
        Arc::new(BusinessCustomerService::new(
            business_repo.clone(),
            queue.clone(),
            time_provider,
        )),
        Arc::new(AttendanceService::new(queue, individual_repo, business_repo)),
    );

    // 5. Start JSON-RPC server
    let rpc_config = RpcServerConfig {
        host: config.rpc_host.clone(),
        port: config.rpc_port,
    };
    let (addr, rpc_handle) = RpcServer::new(rpc_config, handler)
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(addr = %addr, "System ready. Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 7. Graceful shutdown
    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;
    pool.close().await;

    info!("Shutdown complete.");

    Ok(())
}

/// Console logging in the configured format, plus a daily rolling file when
/// `PREREG_LOG_DIR` is set
fn init_logging(config: &DaemonConfig) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("prereg=info"));

    let (file_writer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "prereg.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    match config.log_format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .with(file_writer.map(|w| fmt::layer().json().with_ansi(false).with_writer(w)))
                .init();
        }
        LogFormat::Pretty => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .with(file_writer.map(|w| fmt::layer().with_ansi(false).with_writer(w)))
                .init();
        }
    }

    guard
}
