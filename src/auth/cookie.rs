//! Session cookie helpers.

use axum::http::{header, HeaderMap, HeaderValue};

use crate::config::SessionConfig;

/// `Set-Cookie` value that stores `token` for the configured lifetime.
pub fn session_cookie(cfg: &SessionConfig, token: &str) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        cfg.cookie_name,
        token,
        cfg.ttl_minutes.max(0).saturating_mul(60)
    );
    if cfg.cookie_secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that expires the session cookie immediately.
pub fn clear_cookie(cfg: &SessionConfig) -> String {
    format!("{}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0", cfg.cookie_name)
}

pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == name && !value.is_empty()).then(|| value.to_string())
        })
}

pub fn header_value(cookie: String) -> anyhow::Result<HeaderValue> {
    Ok(HeaderValue::from_str(&cookie)?)
}
