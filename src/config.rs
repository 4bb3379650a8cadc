use anyhow::{bail, Context};

/// Longest accepted session lifetime: one year.
pub const MAX_SESSION_TTL_MINUTES: i64 = 60 * 24 * 365;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    pub cookie_name: String,
    pub cookie_secure: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub session: SessionConfig,
}

impl AppConfig {
    /// Every setting has a development default, so an empty environment
    /// yields a runnable config backed by a local SQLite file.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://ewaste.db?mode=rwc".into());
        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(5);
        let session = SessionConfig {
            secret: std::env::var("SECRET_KEY").unwrap_or_else(|_| "dev-secret".into()),
            issuer: std::env::var("SESSION_ISSUER").unwrap_or_else(|_| "ewaste".into()),
            audience: std::env::var("SESSION_AUDIENCE").unwrap_or_else(|_| "ewaste-web".into()),
            ttl_minutes: parse_ttl_minutes(std::env::var("SESSION_TTL_MINUTES").ok())?,
            cookie_name: std::env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| "ewaste_session".into()),
            cookie_secure: std::env::var("SESSION_COOKIE_SECURE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        };
        Ok(Self {
            database_url,
            max_connections,
            session,
        })
    }
}

/// `SESSION_TTL_MINUTES` must lie in `1..=MAX_SESSION_TTL_MINUTES`; unset means seven days.
fn parse_ttl_minutes(raw: Option<String>) -> anyhow::Result<i64> {
    let Some(raw) = raw else {
        return Ok(60 * 24 * 7);
    };
    let minutes = raw
        .trim()
        .parse::<i64>()
        .with_context(|| format!("SESSION_TTL_MINUTES is not an integer: {raw:?}"))?;
    if !(1..=MAX_SESSION_TTL_MINUTES).contains(&minutes) {
        bail!("SESSION_TTL_MINUTES must be between 1 and {MAX_SESSION_TTL_MINUTES}, got {minutes}");
    }
    Ok(minutes)
}
