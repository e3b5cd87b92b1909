use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use std::{str::FromStr, sync::Arc, time::Duration};

pub mod order;
pub mod payment;
pub mod stats;

pub mod models {
    pub mod order;
    pub mod payment;
}

pub mod dtos {
    pub mod order;
    pub mod payment;
}

const MAX_CONNECTIONS: u32 = 8;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the SQLite store, creating the file if needed, and applies the
/// embedded migrations.
///
/// In-memory URLs get a single pinned connection, since every SQLite
/// connection to `:memory:` would otherwise see its own empty database.
pub async fn setup(database_url: &str) -> Result<Arc<SqlitePool>, Box<dyn std::error::Error>> {
    let in_memory = is_in_memory(database_url);

    let mut options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(BUSY_TIMEOUT);
    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
    };
    let pool = pool_options.connect_with(options).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    log::info!("Database ready at {}", database_url);

    Ok(Arc::new(pool))
}

/// Waits for in-flight queries and closes every pooled connection.
pub async fn close(pool: &SqlitePool) {
    pool.close().await;
    log::info!("Database connections closed");
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:checkout?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://store.db"));
    }

    #[tokio::test]
    async fn setup_creates_both_tables() -> testresult::TestResult {
        let pool = setup("sqlite::memory:").await?;

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('orders', 'payments') ORDER BY name",
        )
        .fetch_all(&*pool)
        .await?;

        assert_eq!(tables, vec!["orders".to_string(), "payments".to_string()]);
        close(&pool).await;
        Ok(())
    }
}
