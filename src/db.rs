use anyhow::Context;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        email         VARCHAR(255) NOT NULL UNIQUE,
        password_hash VARCHAR(255) NOT NULL,
        is_admin      BOOLEAN NOT NULL DEFAULT 0
    )
"#;

const CREATE_PICKUPS: &str = r#"
    CREATE TABLE IF NOT EXISTS pickups (
        id      INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users (id),
        name    VARCHAR(255) NOT NULL,
        email   VARCHAR(255) NOT NULL,
        address VARCHAR(500) NOT NULL,
        item    VARCHAR(255) NOT NULL,
        date    VARCHAR(20) NOT NULL,
        status  VARCHAR(32) NOT NULL DEFAULT 'Scheduled'
    )
"#;

pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .with_context(|| format!("connect to database {}", database_url))
}

/// Creates the `users` and `pickups` tables when they are missing.
pub async fn init_schema(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(CREATE_USERS)
        .execute(db)
        .await
        .context("create users table")?;
    sqlx::query(CREATE_PICKUPS)
        .execute(db)
        .await
        .context("create pickups table")?;
    tracing::debug!("schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let db = connect("sqlite::memory:", 1).await.expect("memory db");
        init_schema(&db).await.expect("first run");
        init_schema(&db).await.expect("second run");

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'pickups') ORDER BY name",
        )
        .fetch_all(&db)
        .await
        .unwrap();
        let names: Vec<_> = tables.into_iter().map(|(n,)| n).collect();
        assert_eq!(names, vec!["pickups".to_string(), "users".to_string()]);
    }

    #[tokio::test]
    async fn email_is_unique_at_storage_level() {
        let db = connect("sqlite::memory:", 1).await.unwrap();
        init_schema(&db).await.unwrap();

        let insert = "INSERT INTO users (email, password_hash, is_admin) VALUES ('a@x.com', 'h', 0)";
        sqlx::query(insert).execute(&db).await.expect("first insert");
        assert!(sqlx::query(insert).execute(&db).await.is_err());
    }
}
