use std::sync::Arc;

use crate::{db::DBLayer, predict::service::PredictionService};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DBLayer>,
    pub predictor: PredictionService,
    pub jwt_secret: String,
}
