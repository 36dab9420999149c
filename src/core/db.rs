use std::time::Duration;

use anyhow::Context;
use sqlx::{pool::PoolOptions, Pool, Postgres};

use crate::settings::Config;

pub async fn init_pool(config: &Config) -> anyhow::Result<Pool<Postgres>> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the document backend")?;
    let pool = PoolOptions::new()
        .min_connections(1)
        .max_connections(20)
        .idle_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    Ok(pool)
}
