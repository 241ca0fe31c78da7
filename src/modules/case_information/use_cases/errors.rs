use crate::modules::case_information::adapters::mappers::information_row_mapper::MappingError;
use crate::modules::case_information::adapters::outbound::command_gateway::GatewayError;
use crate::modules::case_information::core::query::QueryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("invalid request: {0}")]
    Invalid(String),
}

impl ApplicationError {
    /// Caller mistakes detected before the backend was reached.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, ApplicationError::Invalid(_) | ApplicationError::Query(_))
    }
}
