//! Soil agent question handler.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::extractors::auth::AuthUser;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AgentRequest {
    question: Option<String>,
    #[serde(rename = "soilData")]
    soil_data: Option<Value>,
}

#[derive(Serialize)]
pub struct AgentResponse {
    message: String,
    answer: String,
}

/// POST /api/agents - Answer a soil question grounded in the caller's report.
pub async fn ask_agent(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<AgentRequest>,
) -> Result<Json<AgentResponse>, ApiError> {
    // Both fields are checked before any history lookup happens.
    let (Some(question), Some(soil_data)) = (body.question, body.soil_data) else {
        return Err(ApiError::Validation(
            "question and soilData are required".to_string(),
        ));
    };

    let answer = state
        .agent_service
        .ask(user_id, &question, &soil_data)
        .await?;

    Ok(Json(AgentResponse {
        message: "Answer generated".to_string(),
        answer,
    }))
}
