use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::case_information::adapters::inbound::failure::{
    DELETE_FAILED, failure_response,
};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteInformationBody {
    pub ids: Vec<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DeleteInformationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.delete_handler.handle(&body.ids).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => failure_response(&e, DELETE_FAILED),
    }
}
