use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::{
    repo::{self, NewPickup},
    status::PickupStatus,
};
use crate::{
    auth::extractors::{AdminUser, CurrentUser, MaybeUser},
    error::{AppError, AppResult},
    state::AppState,
    views,
};

pub fn pickup_routes() -> Router<AppState> {
    Router::new()
        .route("/schedule", get(schedule_form).post(schedule))
        .route("/my-pickups", get(my_pickups))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/requests", get(list_requests))
        .route("/requests/:id/status", post(update_status))
}

/// Form body of `POST /schedule`. Missing fields read as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScheduleForm {
    pub name: String,
    pub email: String,
    pub address: String,
    pub item: String,
    pub date: String,
}

impl From<ScheduleForm> for NewPickup {
    fn from(f: ScheduleForm) -> Self {
        Self {
            name: f.name.trim().to_string(),
            email: f.email.trim().to_string(),
            address: f.address.trim().to_string(),
            item: f.item.trim().to_string(),
            date: f.date.trim().to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StatusForm {
    pub status: String,
}

pub async fn schedule_form(MaybeUser(user): MaybeUser) -> Html<String> {
    Html(views::pickups::schedule_form(user.as_ref()))
}

#[instrument(skip(state, user, form), fields(user_id = user.id))]
pub async fn schedule(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<ScheduleForm>,
) -> AppResult<Html<String>> {
    let pickup = repo::create(&state.db, user.id, &form.into()).await?;
    info!(pickup_id = pickup.id, "pickup scheduled");
    Ok(Html(views::pickups::confirmation(Some(&user), &pickup)))
}

#[instrument(skip(state, user), fields(user_id = user.id))]
pub async fn my_pickups(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Html<String>> {
    let pickups = repo::list_by_user(&state.db, user.id).await?;
    Ok(Html(views::pickups::my_pickups(&user, &pickups)))
}

#[instrument(skip(state, admin), fields(admin_id = admin.id))]
pub async fn list_requests(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
) -> AppResult<Html<String>> {
    let pickups = repo::list_all(&state.db).await?;
    Ok(Html(views::pickups::admin_requests(&admin, &pickups)))
}

/// Empty status is a no-op; anything outside [`PickupStatus`] is rejected.
#[instrument(skip(state, admin, form), fields(admin_id = admin.id))]
pub async fn update_status(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i64>,
    Form(form): Form<StatusForm>,
) -> AppResult<Redirect> {
    if repo::find(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound);
    }
    let raw = form.status.trim();
    if raw.is_empty() {
        return Ok(Redirect::to("/requests"));
    }
    let status: PickupStatus = raw.parse().map_err(|_| {
        warn!(pickup_id = id, status = %raw, "rejected unknown status");
        AppError::InvalidStatus(raw.to_string())
    })?;
    if !repo::update_status(&state.db, id, status).await? {
        return Err(AppError::NotFound);
    }
    info!(pickup_id = id, %status, "pickup status updated");
    Ok(Redirect::to("/requests"))
}
