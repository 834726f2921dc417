use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod auth;
mod db;
mod model;
mod pages;
mod predict;
mod state;
mod templates;

use db::DBLayer;
use predict::service::PredictionService;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // -----------------------------
    // Logging
    // -----------------------------
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("🚀 Starting namecast server...");

    // -----------------------------
    // Shared state / Dependencies
    // -----------------------------
    let db_path = dotenvy::var("NAMECAST_DB_PATH").unwrap_or_else(|_| "namecastdb".into());
    let db = Arc::new(DBLayer::new(&db_path)?);
    let predictor = PredictionService::from_env();
    let jwt_secret = dotenvy::var("JWT_SECRET").unwrap_or_else(|_| "supersecret123".into());

    let state = AppState {
        db,
        predictor,
        jwt_secret,
    };

    // -----------------------------
    // Routers
    // -----------------------------
    let app = Router::new()
        // Home form, blog demo, admin shell
        .merge(pages::router())
        // Login page + JSON credential API
        .merge(auth::router())
        // Prediction page + JSON API
        .merge(predict::router())
        // CORS for frontend
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        // Attach shared state
        .with_state(state);

    let addr = dotenvy::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    println!("🌐 HTTP listening on http://{addr}");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
