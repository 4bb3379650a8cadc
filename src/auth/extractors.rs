//! Verified session identities, handed to handlers as extractors.
//!
//! A handler that takes [`CurrentUser`] or [`AdminUser`] only runs once the
//! session cookie has been verified and its user loaded; otherwise the
//! browser is redirected. [`MaybeUser`] never rejects and is used by public
//! pages that only adapt their navigation.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tracing::warn;

use super::{cookie::extract_cookie, repo::User};
use crate::{error::AppError, state::AppState};

pub struct MaybeUser(pub Option<User>);

pub struct CurrentUser(pub User);

pub struct AdminUser(pub User);

async fn session_user(parts: &Parts, state: &AppState) -> Result<Option<User>, AppError> {
    let Some(token) = extract_cookie(&parts.headers, &state.config.session.cookie_name) else {
        return Ok(None);
    };
    let user_id = match state.keys.verify(&token) {
        Ok(id) => id,
        Err(e) => {
            warn!(error = %e, "invalid or expired session token");
            return Ok(None);
        }
    };
    let user = User::find_by_id(&state.db, user_id).await?;
    if user.is_none() {
        warn!(user_id, "session refers to unknown user");
    }
    Ok(user)
}

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(session_user(parts, state).await?))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match session_user(parts, state).await {
            Ok(Some(user)) => Ok(CurrentUser(user)),
            Ok(None) => Err(Redirect::to("/login").into_response()),
            Err(e) => Err(e.into_response()),
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        if !user.is_admin {
            warn!(user_id = user.id, "non-admin denied admin route");
            return Err(Redirect::to("/").into_response());
        }
        Ok(AdminUser(user))
    }
}
