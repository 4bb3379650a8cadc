// Test utilities shared by the unit and HTTP-level tests.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tower::ServiceExt;

use crate::{
    app::build_app,
    config::{AppConfig, SessionConfig},
    db,
    state::AppState,
};

pub const COOKIE_NAME: &str = "ewaste_session";

/// A single-connection in-memory database with the schema applied.
pub async fn memory_db() -> SqlitePool {
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    db::init_schema(&db).await.expect("Failed to create schema");
    db
}

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".into(),
        max_connections: 1,
        session: SessionConfig {
            secret: "test-secret".into(),
            issuer: "test-issuer".into(),
            audience: "test-aud".into(),
            ttl_minutes: 5,
            cookie_name: COOKIE_NAME.into(),
            cookie_secure: false,
        },
    }
}

pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    pub async fn with_config(config: AppConfig) -> Self {
        let state = AppState::from_parts(memory_db().await, Arc::new(config));
        let router = build_app(state.clone());
        Self { state, router }
    }

    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(req)
            .await
            .expect("router is infallible")
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response<Body> {
        let mut req = Request::builder().method("GET").uri(path);
        if let Some(c) = cookie {
            req = req.header(header::COOKIE, c);
        }
        self.send(req.body(Body::empty()).unwrap()).await
    }

    /// `body` must already be `application/x-www-form-urlencoded`.
    pub async fn post_form(&self, path: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut req = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(c) = cookie {
            req = req.header(header::COOKIE, c);
        }
        self.send(req.body(Body::from(body.to_string())).unwrap()).await
    }

    /// Registers an account and returns its session cookie pair.
    pub async fn register(&self, email: &str, password: &str, admin: bool) -> String {
        let mut body = format!("email={email}&password={password}");
        if admin {
            body.push_str("&is_admin=on");
        }
        let res = self.post_form("/register", &body, None).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER, "register should redirect");
        session_cookie(&res).expect("register should set a session cookie")
    }

    pub async fn count(&self, table: &str) -> i64 {
        let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.state.db)
            .await
            .unwrap();
        n
    }
}

/// The `name=value` pair of a non-empty session cookie set by `res`.
pub fn session_cookie(res: &Response<Body>) -> Option<String> {
    res.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{COOKIE_NAME}=")) && pair.len() > COOKIE_NAME.len() + 1)
        .map(str::to_string)
}

pub fn location(res: &Response<Body>) -> Option<&str> {
    res.headers().get(header::LOCATION)?.to_str().ok()
}

pub async fn body_text(res: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
