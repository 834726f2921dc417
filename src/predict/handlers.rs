use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::{state::AppState, templates};

#[derive(Serialize)]
struct PredictionPageContext {
    name: String,
    age: String,
    gender: String,
    nationality: String,
}

#[derive(Serialize)]
struct PredictionErrorContext {
    message: &'static str,
}

const GENERIC_PREDICTION_ERROR: &str = "Error fetching predictions. Try again.";

/// Prediction page: all three guesses or the single generic error message,
/// never partial fields.
pub async fn prediction_page(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    match state.predictor.predict(&name).await {
        Ok(prediction) => {
            let ctx = PredictionPageContext {
                age: prediction.age_text(),
                gender: prediction.gender_text().to_string(),
                nationality: prediction.nationality().to_string(),
                name: prediction.name,
            };
            match templates::render("prediction.html", ctx) {
                Ok(html) => html.into_response(),
                Err(err) => err.into_response(),
            }
        }
        Err(err) => {
            error!(%name, error = %err, "prediction aggregation failed");
            let ctx = PredictionErrorContext {
                message: GENERIC_PREDICTION_ERROR,
            };
            match templates::render("prediction_error.html", ctx) {
                Ok(html) => (StatusCode::BAD_GATEWAY, html).into_response(),
                Err(err) => err.into_response(),
            }
        }
    }
}

#[derive(Serialize)]
pub struct PredictResponse {
    pub name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub nationality: String,
}

pub async fn predict_api(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PredictResponse>, (StatusCode, String)> {
    let prediction = state.predictor.predict(&name).await.map_err(|err| {
        error!(%name, error = %err, "prediction aggregation failed");
        (StatusCode::BAD_GATEWAY, "prediction_failed".to_string())
    })?;

    Ok(Json(PredictResponse {
        nationality: prediction.nationality().to_string(),
        name: prediction.name,
        age: prediction.age,
        gender: prediction.gender,
    }))
}
