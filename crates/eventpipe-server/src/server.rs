//! Service wiring and lifecycle

use crate::{Result, shutdown::wait_for_shutdown};
use eventpipe_api::{AppState, create_router};
use eventpipe_config::Config;
use eventpipe_core::EventSink;
use eventpipe_pipeline::{BasicValidator, EventPipeline, PassthroughProcessor, PipelineMetrics};
use eventpipe_storage::MySqlStorage;
use std::sync::Arc;
use tracing::{error, info};

/// The assembled service: storage, pipeline, and HTTP surface.
pub struct EventPipeServer {
    config: Config,
}

impl EventPipeServer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run until a shutdown signal arrives, then drain and exit.
    ///
    /// Order on the way down: stop accepting HTTP requests first, then drain
    /// the pipeline so events already accepted still reach the sink, then
    /// close the pool.
    pub async fn run(self) -> Result<()> {
        let storage = Arc::new(MySqlStorage::connect(&self.config.database).await?);
        storage.ensure_schema().await?;
        storage.health_check().await?;

        let metrics = Arc::new(PipelineMetrics::new());
        let pipeline = Arc::new(EventPipeline::new(
            Arc::clone(&storage) as Arc<dyn EventSink>,
            Arc::new(PassthroughProcessor::new()),
            Arc::new(BasicValidator::new()),
            metrics,
            self.config.pipeline.clone(),
        ));

        let app = create_router(AppState {
            pipeline: Arc::clone(&pipeline),
        });

        let bind_address = self.config.server.bind_address();
        let listener = tokio::net::TcpListener::bind(&bind_address).await?;
        info!(addr = %bind_address, "http server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                if let Err(err) = wait_for_shutdown().await {
                    error!(error = %err, "signal listener failed");
                }
            })
            .await?;

        info!("http server stopped, draining pipeline");
        pipeline.shutdown().await;
        storage.close().await;

        info!("service stopped");
        Ok(())
    }
}
