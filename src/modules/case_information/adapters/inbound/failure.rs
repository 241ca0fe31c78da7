// Failure reporting shared by the inbound adapters.
//
// Adapters are the only place errors are handled. Caller mistakes are answered with their own
// message, anything else is logged and answered with the generic message of the operation.

use crate::modules::case_information::use_cases::errors::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const SAVE_FAILED: &str = "Fail to save information";
pub const LIST_FAILED: &str = "Fail to get list information";
pub const DELETE_FAILED: &str = "Fail to delete information";
pub const EXPORT_FAILED: &str = "Fail to export report";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn failure_response(error: &ApplicationError, generic: &'static str) -> Response {
    if error.is_caller_error() {
        return error_response(StatusCode::BAD_REQUEST, error.to_string());
    }
    tracing::error!(error = %error, "{generic}");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, generic)
}

pub fn graphql_failure(error: &ApplicationError, generic: &'static str) -> async_graphql::Error {
    if error.is_caller_error() {
        return async_graphql::Error::new(error.to_string());
    }
    tracing::error!(error = %error, "{generic}");
    async_graphql::Error::new(generic)
}
