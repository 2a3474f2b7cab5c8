use clap::Parser;
use eventpipe_config::{Config, LoggingConfig};
use eventpipe_server::{Args, EventPipeServer, Result};
use std::process;
use tracing::info;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("eventpipe-server failed: {e}");
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(&path.to_string_lossy())?,
        None => Config::load()?,
    };

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    config.validate()?;

    init_logging(&config.logging);

    info!(
        db_host = %config.database.host,
        db_name = %config.database.database,
        worker_count = config.pipeline.worker_count,
        queue_size = config.pipeline.queue_size,
        max_retries = config.pipeline.max_retries,
        retry_backoff_ms = config.pipeline.retry_base_backoff_ms,
        "loaded configuration"
    );

    EventPipeServer::new(config).run().await
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level when set.
fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
