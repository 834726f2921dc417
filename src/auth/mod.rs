pub mod authorizer;
pub mod handlers;
pub mod jwt;
pub mod session;
pub mod types;
pub mod utils;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Auth router: login page + JSON credential API.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            get(handlers::login_page).post(handlers::login_submit),
        )
        .route("/api/auth/register", post(handlers::api_register_handler))
        .route("/api/auth/login", post(handlers::api_login_handler))
}
