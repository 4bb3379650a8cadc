use axum::{response::Html, routing::get, Router};

use crate::{auth::extractors::MaybeUser, state::AppState, views};

pub fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/centers", get(centers))
        .route("/health", get(|| async { "ok" }))
}

pub async fn home(MaybeUser(user): MaybeUser) -> Html<String> {
    Html(views::site::home(user.as_ref()))
}

pub async fn centers(MaybeUser(user): MaybeUser) -> Html<String> {
    Html(views::site::centers(user.as_ref()))
}
