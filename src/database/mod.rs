use std::time::{Duration, Instant};

use sqlx::{postgres::PgPoolOptions, PgPool};
use crate::{config::Config, errors::Result};

pub mod queries;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Builds a pool without dialing; connections are opened on first use.
    pub fn new_lazy(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    /// Dials the database every `db_retry_interval_secs` until it answers or
    /// `db_retry_timeout_secs` has elapsed.
    pub async fn connect_with_retry(config: &Config) -> Result<Self> {
        let started = Instant::now();
        let interval = Duration::from_secs(config.db_retry_interval_secs);
        let deadline = Duration::from_secs(config.db_retry_timeout_secs);

        loop {
            match Self::new(&config.db_connection, config.max_connections).await {
                Ok(database) => {
                    tracing::info!(
                        "Connected to database in {:.2}s",
                        started.elapsed().as_secs_f64()
                    );
                    return Ok(database);
                }
                Err(e) => {
                    tracing::warn!("Unable to connect to the database: {}", e);
                    if started.elapsed() >= deadline {
                        return Err(e);
                    }
                }
            }

            tokio::time::sleep(interval).await;
        }
    }

    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(sqlx::Error::from)?;
        Ok(())
    }

    pub async fn is_connected(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
