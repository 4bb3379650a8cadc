use sqlx::{FromRow, SqlitePool};

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String, // argon2 PHC string
    pub is_admin: bool,
}

impl User {
    /// Exact lookup; callers normalize the email first.
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, is_admin
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(db: &SqlitePool, id: i64) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, email, password_hash, is_admin FROM users WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn create(
        db: &SqlitePool,
        email: &str,
        password_hash: &str,
        is_admin: bool,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, is_admin)
            VALUES (?, ?, ?)
            RETURNING id, email, password_hash, is_admin
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(is_admin)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}

/// Trims and lowercases an email the way registration stores it.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
