pub mod handlers;
pub mod service;
pub mod types;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/prediction/{name}", get(handlers::prediction_page))
        .route("/api/predict/{name}", get(handlers::predict_api))
}
