use super::error::ApiError;
use crate::application::context::AppContext;
use crate::domain::ml::RegressionMetrics;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

pub const WELCOME: &str = "Welcome to the Used Car Price Prediction API!";

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub predicted_price: f64,
}

pub async fn index_handler() -> &'static str {
    WELCOME
}

pub async fn car_data_handler(State(ctx): State<Arc<AppContext>>) -> Response {
    Json(&ctx.catalog).into_response()
}

pub async fn predict_handler(
    State(ctx): State<Arc<AppContext>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::MalformedPayload(e.body_text()))?;
    let Value::Object(raw) = body else {
        return Err(ApiError::MalformedPayload(
            "Expected a JSON object".to_string(),
        ));
    };

    let predicted_price = ctx.predictor.predict_raw(&raw).inspect_err(|e| {
        debug!("Rejected prediction request: {}", e);
    })?;

    Ok(Json(PredictionResponse { predicted_price }))
}

pub async fn evaluate_handler(State(ctx): State<Arc<AppContext>>) -> Json<RegressionMetrics> {
    Json(ctx.metrics)
}
