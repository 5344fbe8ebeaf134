//! Wage prediction endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::WageQuery;

/// Wage prediction response
#[derive(Debug, Serialize)]
pub struct WageResponse {
    pub predicted_wage: i64,
}

/// POST /predict_wage
async fn predict_wage(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody,
) -> Result<Json<WageResponse>, ApiError> {
    let query = WageQuery::from_json(body, state.policy)?;
    let predicted_wage = state.wage.predict(query.years_of_experience);

    tracing::debug!(
        years = query.years_of_experience,
        predicted_wage,
        "Predicted wage"
    );

    Ok(Json(WageResponse { predicted_wage }))
}

/// Wage routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/predict_wage", post(predict_wage))
}
