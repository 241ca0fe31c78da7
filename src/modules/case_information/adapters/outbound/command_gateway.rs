// Outbound port to the backend that owns case information rows.
//
// Every operation is a single asynchronous round trip. The gateway does not retry, cache or
// batch, and its failures are not classified beyond the command that failed.

use crate::modules::case_information::adapters::outbound::information_row::{
    InformationRow, RawInformationList,
};
use crate::modules::case_information::core::query::QueryOption;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CREATE_INFORMATION: &str = "create_information";
pub const UPDATE_INFORMATION: &str = "update_information";
pub const GET_INFORMATION_LIST: &str = "get_information_list";
pub const GET_NEW_INFORMATION_LIST: &str = "get_new_information_list";
pub const DELETE_INFORMATION: &str = "delete_information";
pub const EXPORT_EXCEL: &str = "export_excel";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("command {command} failed: {reason}")]
pub struct GatewayError {
    pub command: &'static str,
    pub reason: String,
}

impl GatewayError {
    pub fn new(command: &'static str, reason: impl Into<String>) -> Self {
        Self {
            command,
            reason: reason.into(),
        }
    }
}

/// Export request payload. Bounds are inclusive epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub from: i64,
    pub to: i64,
    pub path: String,
}

#[async_trait]
pub trait CommandGateway: Send + Sync {
    /// Persists a new row sent with the seed id and returns the assigned identity.
    async fn create_information(&self, row: InformationRow) -> Result<String, GatewayError>;

    async fn update_information(&self, row: InformationRow) -> Result<(), GatewayError>;

    async fn get_information_list(
        &self,
        query: &QueryOption,
    ) -> Result<RawInformationList, GatewayError>;

    /// Listing for the "new" filter mode. Which rows qualify is decided by the backend.
    async fn get_new_information_list(
        &self,
        query: &QueryOption,
    ) -> Result<RawInformationList, GatewayError>;

    async fn delete_information(&self, ids: &[String]) -> Result<(), GatewayError>;

    /// Produces the report file and returns the path it was saved to.
    async fn export_excel(&self, request: ExportRequest) -> Result<String, GatewayError>;
}
