//! Order Engine Binary
//!
//! Runs the NBN order pipeline.
//!
//! # Usage
//!
//! ```bash
//! # One-shot: select eligible applications, dispatch them, wait for the
//! # workers, exit
//! cargo run --bin order-engine -- process-orders
//!
//! # Long-running: listing API plus the optional dispatch scheduler
//! cargo run --bin order-engine -- serve
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `DATABASE_URL`: PostgreSQL connection URL
//! - `NBN_B2B_ENDPOINT`: wholesale ordering endpoint URL
//!
//! ## Optional
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use order_engine::application::services::DispatchSchedulerService;
use order_engine::application::use_cases::{DispatchOrdersUseCase, SubmitOrderUseCase};
use order_engine::config::{Config, load_config};
use order_engine::infrastructure::http::{AppState, create_router};
use order_engine::infrastructure::ordering::b2b::B2bOrderingAdapter;
use order_engine::infrastructure::persistence::PostgresApplicationRepository;
use order_engine::infrastructure::queue::TokioSubmissionQueue;
use order_engine::observability::{MetricsConfig, init_metrics};
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Concrete type alias for the submission worker.
type ConcreteWorker = SubmitOrderUseCase<B2bOrderingAdapter, PostgresApplicationRepository>;

/// Concrete type alias for the submission queue.
type ConcreteQueue = TokioSubmissionQueue<B2bOrderingAdapter, PostgresApplicationRepository>;

/// Concrete type alias for the dispatch coordinator.
type ConcreteDispatch = DispatchOrdersUseCase<PostgresApplicationRepository, ConcreteQueue>;

/// Operator command selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Run one dispatch invocation and exit.
    ProcessOrders,
    /// Run the listing API and optional scheduler.
    Serve,
}

/// Wired pipeline shared by both commands.
struct Pipeline {
    application_repo: Arc<PostgresApplicationRepository>,
    queue: Arc<ConcreteQueue>,
    dispatch: Arc<ConcreteDispatch>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    let command = parse_command()?;

    let config = load_config(None).context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    log_config(&config);

    let pipeline = build_pipeline(&config).await?;

    match command {
        Command::ProcessOrders => run_process_orders(&pipeline).await,
        Command::Serve => run_serve(&config, &pipeline).await,
    }
}

/// Parse the operator command; `serve` is the default.
fn parse_command() -> anyhow::Result<Command> {
    match std::env::args().nth(1).as_deref() {
        None | Some("serve") => Ok(Command::Serve),
        Some("process-orders") => Ok(Command::ProcessOrders),
        Some(other) => anyhow::bail!(
            "unknown command '{other}' (expected 'process-orders' or 'serve')"
        ),
    }
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses a static directive string that is a compile-time constant
/// guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "order_engine=info"
                    .parse()
                    .expect("static directive 'order_engine=info' is valid"),
            ),
        )
        .init();
}

/// Log the parsed configuration.
fn log_config(config: &Config) {
    tracing::info!(
        endpoint = %config.ordering.endpoint_url,
        http_port = config.server.http_port,
        scheduler_enabled = config.dispatch.scheduler_enabled,
        max_concurrent = config.dispatch.max_concurrent,
        "Configuration loaded"
    );
}

/// Wire the repository, adapter, queue, and coordinator.
async fn build_pipeline(config: &Config) -> anyhow::Result<Pipeline> {
    let application_repo = Arc::new(
        PostgresApplicationRepository::with_max_connections(
            &config.persistence.database_url,
            config.persistence.max_connections,
        )
        .await
        .context("failed to connect to database")?,
    );

    let ordering = Arc::new(
        B2bOrderingAdapter::new(&config.ordering.b2b_config())
            .context("failed to initialize B2B ordering adapter")?,
    );

    let worker: Arc<ConcreteWorker> = Arc::new(SubmitOrderUseCase::new(
        ordering,
        Arc::clone(&application_repo),
    ));

    let queue = Arc::new(TokioSubmissionQueue::new(
        worker,
        config.dispatch.max_concurrent,
    ));

    let dispatch = Arc::new(DispatchOrdersUseCase::new(
        Arc::clone(&application_repo),
        Arc::clone(&queue),
    ));

    Ok(Pipeline {
        application_repo,
        queue,
        dispatch,
    })
}

/// Run one dispatch invocation, wait for the workers it spawned, exit.
///
/// The exit code reflects only whether selection and enqueuing succeeded;
/// individual order outcomes surface through application statuses.
async fn run_process_orders(pipeline: &Pipeline) -> anyhow::Result<()> {
    let summary = pipeline
        .dispatch
        .execute()
        .await
        .context("dispatch run failed")?;

    if summary.is_empty() {
        println!("No NBN applications to process.");
        return Ok(());
    }

    println!("Processing {} NBN applications...", summary.found);
    println!("Dispatched {} jobs to queue.", summary.dispatched);

    // Let in-flight submissions finish before the process exits.
    pipeline.queue.drain().await;

    Ok(())
}

/// Run the listing API with graceful shutdown, plus the scheduler and
/// metrics exporter when enabled.
async fn run_serve(config: &Config, pipeline: &Pipeline) -> anyhow::Result<()> {
    if config.server.metrics_enabled {
        let metrics_addr = SocketAddr::from(([0, 0, 0, 0], config.server.metrics_port));
        init_metrics(&MetricsConfig::with_addr(metrics_addr))
            .context("failed to start metrics exporter")?;
    }

    let shutdown_token = CancellationToken::new();

    let scheduler = DispatchSchedulerService::new(
        config.dispatch.scheduler_config(),
        Arc::clone(&pipeline.dispatch),
        shutdown_token.clone(),
    );
    let scheduler_handle = scheduler.start();

    let state = AppState {
        application_repo: Arc::clone(&pipeline.application_repo),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(state);

    let http_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.http_port)
            .parse()
            .context("invalid HTTP bind address")?;

    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /api/applications");

    let listener = TcpListener::bind(http_addr)
        .await
        .context("failed to bind HTTP listener")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    // Stop the scheduler, then let in-flight submissions finish.
    shutdown_token.cancel();
    if let Some(handle) = scheduler_handle {
        let _ = handle.await;
    }
    pipeline.queue.drain().await;

    tracing::info!("Order engine stopped");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed: a process that cannot
/// respond to termination signals should fail fast at startup.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
