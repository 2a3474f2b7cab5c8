use crate::{Result, StorageError};
use async_trait::async_trait;
use eventpipe_config::DatabaseConfig;
use eventpipe_core::{EventSink, ProcessedEvent};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::{debug, error, info};

const INSERT_EVENT: &str = "\
    INSERT INTO processed_events \
    (id, type, source, user_id, processed_data, processing_time_ms, created_at, processed_at) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)";

const CREATE_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS processed_events (\
        id VARCHAR(36) NOT NULL, \
        type VARCHAR(255) NOT NULL, \
        source VARCHAR(255) NOT NULL, \
        user_id VARCHAR(255) NULL, \
        processed_data JSON NOT NULL, \
        processing_time_ms BIGINT NOT NULL, \
        created_at DATETIME(6) NOT NULL, \
        processed_at DATETIME(6) NOT NULL, \
        KEY idx_processed_events_id (id), \
        KEY idx_processed_events_type (type)\
    )";

/// MySQL-backed event sink
#[derive(Debug, Clone)]
pub struct MySqlStorage {
    pool: MySqlPool,
}

impl MySqlStorage {
    /// Connect to MySQL with the configured pool bounds
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "connecting to MySQL"
        );

        let mut pool_options = MySqlPoolOptions::new();

        if let Some(max_conn) = config.max_connections {
            pool_options = pool_options.max_connections(max_conn);
        }
        if let Some(min_conn) = config.min_connections {
            pool_options = pool_options.min_connections(min_conn);
        }
        if let Some(timeout) = config.connect_timeout {
            pool_options = pool_options.acquire_timeout(timeout);
        }

        let pool = pool_options.connect(&config.url()).await.map_err(|e| {
            error!(error = %e, "failed to connect to MySQL");
            StorageError::connection(format!("failed to connect to MySQL: {e}"))
        })?;

        info!("mysql storage initialized");
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Create the processed_events table if it does not exist
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        debug!("processed_events schema ensured");
        Ok(())
    }

    /// Cheap connectivity probe
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    /// Close the connection pool
    pub async fn close(&self) {
        info!("closing MySQL connection pool");
        self.pool.close().await;
    }
}

#[async_trait]
impl EventSink for MySqlStorage {
    async fn store(&self, events: &[ProcessedEvent]) -> eventpipe_core::Result<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "begin transaction failed");
            StorageError::transaction(format!("begin transaction failed: {e}"))
        })?;

        for processed in events {
            let event = &processed.event;
            let data = serde_json::to_string(&event.data).map_err(|e| {
                error!(event_id = %event.id, error = %e, "failed to serialize event data");
                StorageError::from(e)
            })?;

            sqlx::query(INSERT_EVENT)
                .bind(&event.id)
                .bind(&event.event_type)
                .bind(&event.source)
                .bind(&event.user_id)
                .bind(data)
                .bind(processed.processing_time_ms)
                .bind(event.timestamp)
                .bind(processed.processed_at)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    error!(
                        event_id = %event.id,
                        event_type = %event.event_type,
                        source = %event.source,
                        error = %e,
                        "insert failed"
                    );
                    StorageError::query(format!("insert failed: {e}"))
                })?;

            debug!(
                event_id = %event.id,
                event_type = %event.event_type,
                source = %event.source,
                processing_time_ms = processed.processing_time_ms,
                "event stored"
            );
        }

        // Dropping an uncommitted sqlx transaction rolls it back, so any
        // error above leaves the batch un-applied.
        tx.commit().await.map_err(|e| {
            error!(error = %e, "transaction commit failed");
            StorageError::transaction(format!("transaction commit failed: {e}"))
        })?;

        debug!(count = events.len(), "batch stored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventpipe_core::Event;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_insert_statement_column_order() {
        // Keep the statement in sync with the bind order in `store`.
        let columns = [
            "id",
            "type",
            "source",
            "user_id",
            "processed_data",
            "processing_time_ms",
            "created_at",
            "processed_at",
        ];
        for column in columns {
            assert!(INSERT_EVENT.contains(column), "missing column: {column}");
        }
        assert_eq!(INSERT_EVENT.matches('?').count(), columns.len());
    }

    #[test]
    fn test_event_data_serializes_for_column() {
        let fixture = Event::new("user_action", "web").with_data("action", json!("click"));
        let actual = serde_json::to_string(&fixture.data).unwrap();
        assert_eq!(actual, r#"{"action":"click"}"#);
    }

    // Requires a running MySQL instance; run with
    // `cargo test -p eventpipe-storage -- --ignored`.
    #[tokio::test]
    #[ignore]
    async fn test_store_round_trip_against_live_database() {
        let config = DatabaseConfig::default();
        let storage = MySqlStorage::connect(&config).await.unwrap();
        storage.ensure_schema().await.unwrap();
        storage.health_check().await.unwrap();

        let event = Event::new("user_action", "web").with_data("action", json!("click"));
        let processed = ProcessedEvent {
            event,
            processing_time_ms: 2,
            processed_at: chrono::Utc::now(),
        };

        storage.store(&[processed]).await.unwrap();
        storage.close().await;
    }
}
