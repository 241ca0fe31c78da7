// Command gateway that answers every listing with a canned backend response.
// Mutating commands are not expected in the tests using it and fail loudly.

use crate::modules::case_information::adapters::outbound::command_gateway::{
    CommandGateway, ExportRequest, GatewayError,
};
use crate::modules::case_information::adapters::outbound::information_row::{
    InformationRow, RawInformationList,
};
use crate::modules::case_information::core::query::QueryOption;
use async_trait::async_trait;

pub struct StubCommandGateway {
    answer: RawInformationList,
}

impl StubCommandGateway {
    pub fn answering(rows: Vec<InformationRow>, total: Option<i64>) -> Self {
        Self {
            answer: (rows, total),
        }
    }
}

#[async_trait]
impl CommandGateway for StubCommandGateway {
    async fn create_information(&self, _row: InformationRow) -> Result<String, GatewayError> {
        Err(GatewayError::new("create_information", "stub"))
    }

    async fn update_information(&self, _row: InformationRow) -> Result<(), GatewayError> {
        Err(GatewayError::new("update_information", "stub"))
    }

    async fn get_information_list(
        &self,
        _query: &QueryOption,
    ) -> Result<RawInformationList, GatewayError> {
        Ok(self.answer.clone())
    }

    async fn get_new_information_list(
        &self,
        _query: &QueryOption,
    ) -> Result<RawInformationList, GatewayError> {
        Ok(self.answer.clone())
    }

    async fn delete_information(&self, _ids: &[String]) -> Result<(), GatewayError> {
        Err(GatewayError::new("delete_information", "stub"))
    }

    async fn export_excel(&self, _request: ExportRequest) -> Result<String, GatewayError> {
        Err(GatewayError::new("export_excel", "stub"))
    }
}
