pub mod handlers;
pub mod repo;
pub mod status;

#[cfg(test)]
mod tests;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::pickup_routes())
        .merge(handlers::admin_routes())
}
