use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::case_information::adapters::inbound::failure::{
    SAVE_FAILED, error_response, failure_response,
};
use crate::modules::case_information::adapters::inbound::information_input::InformationInput;
use crate::modules::case_information::core::information::Information;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<InformationInput>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let information = match Information::try_from(body) {
        Ok(information) => information,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state.update_handler.handle(&information).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => failure_response(&e, SAVE_FAILED),
    }
}
