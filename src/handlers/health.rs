use axum::{routing::get, Router};

use crate::{names, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::HEALTH_URL, get(health))
}

async fn health() -> &'static str {
    "OK"
}
