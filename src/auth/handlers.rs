use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        cookie::{clear_cookie, header_value, session_cookie},
        extractors::{CurrentUser, MaybeUser},
        password::{hash_password, verify_password},
        repo::{normalize_email, User},
    },
    error::AppResult,
    state::AppState,
    views::auth::{auth_page, AuthForm},
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
}

/// Form body of `POST /register`. An HTML checkbox is only sent when ticked.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub is_admin: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Redirects home with a freshly signed session cookie for `user`.
fn start_session(state: &AppState, user: &User) -> AppResult<Response> {
    let token = state.keys.sign(user.id)?;
    let cookie = header_value(session_cookie(&state.config.session, &token))?;
    Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response())
}

pub async fn register_form(MaybeUser(user): MaybeUser) -> Html<String> {
    Html(auth_page(AuthForm::Register, user.as_ref()))
}

pub async fn login_form(MaybeUser(user): MaybeUser) -> Html<String> {
    Html(auth_page(AuthForm::Login, user.as_ref()))
}

#[instrument(skip(state, form))]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> AppResult<Response> {
    let email = normalize_email(&form.email);
    let is_admin = form.is_admin.is_some_and(|v| !v.is_empty());

    if email.is_empty() || form.password.is_empty() {
        warn!("register missing email or password");
        return Ok(Html(auth_page(AuthForm::Register, None)).into_response());
    }

    if User::find_by_email(&state.db, &email).await?.is_some() {
        warn!(email = %email, "email already registered");
        return Ok(Html(auth_page(AuthForm::Register, None)).into_response());
    }

    let hash = hash_password(&form.password)?;
    let user = User::create(&state.db, &email, &hash, is_admin).await?;

    info!(user_id = user.id, email = %user.email, is_admin, "user registered");
    start_session(&state, &user)
}

#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let email = normalize_email(&form.email);
    let rejected = || -> AppResult<Response> {
        Ok(Html(auth_page(AuthForm::Login, None)).into_response())
    };

    let Some(user) = User::find_by_email(&state.db, &email).await? else {
        warn!(email = %email, "login unknown email");
        return rejected();
    };

    if !verify_password(&form.password, &user.password_hash)? {
        warn!(email = %email, user_id = user.id, "login invalid password");
        return rejected();
    }

    info!(user_id = user.id, "user logged in");
    start_session(&state, &user)
}

#[instrument(skip(state, user), fields(user_id = user.id))]
pub async fn logout(State(state): State<AppState>, CurrentUser(user): CurrentUser) -> AppResult<Response> {
    let cookie = header_value(clear_cookie(&state.config.session))?;
    info!("user logged out");
    Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response())
}
