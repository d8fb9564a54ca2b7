use sqlx::SqlitePool;
use tracing::{error, info};
use trackdown_infrastructure::database::create_pool;

pub async fn init_database(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    info!("Initializing database: {}", database_url);

    let pool = create_pool(database_url, max_connections).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!("Database initialized successfully");

    Ok(pool)
}
