use anyhow::{Context, Result};
use sqlx::MySqlPool;

pub async fn init_db(database_url: &str) -> Result<MySqlPool> {
    let pool = MySqlPool::connect(database_url)
        .await
        .context("Failed to connect to database")?;

    ensure_schema(&pool).await?;

    Ok(pool)
}

/// Creates the tables this service owns if they are not there yet.
async fn ensure_schema(pool: &MySqlPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS transactions (
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            date DATE NOT NULL,
            party_name VARCHAR(255) NOT NULL,
            details VARCHAR(255) NULL,
            amount DECIMAL(10, 2) NOT NULL,
            type VARCHAR(16) NOT NULL,
            user_id BIGINT UNSIGNED NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
            INDEX idx_transactions_user_date (user_id, date)
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create transactions table")?;

    tracing::info!("Database schema ready");
    Ok(())
}
