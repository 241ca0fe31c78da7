use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::case_information::adapters::inbound::failure::{
    EXPORT_FAILED, error_response, failure_response,
};
use crate::modules::case_information::use_cases::export_information::handler::default_export_path;
use crate::shared::core::primitives::from_epoch_millis;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ExportInformationBody {
    pub from: i64,
    pub to: i64,
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Serialize)]
pub struct ExportInformationResponse {
    pub path: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ExportInformationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let (Some(from), Some(to)) = (from_epoch_millis(body.from), from_epoch_millis(body.to)) else {
        return error_response(StatusCode::BAD_REQUEST, "export range is out of range");
    };
    let path = body
        .path
        .unwrap_or_else(|| default_export_path(&state.export_directory, &from, &to, &Utc::now()));

    match state.export_handler.handle(&from, &to, &path).await {
        Ok(path) => Json(ExportInformationResponse { path }).into_response(),
        Err(e) => failure_response(&e, EXPORT_FAILED),
    }
}
