use crate::modules::case_information::adapters::mappers::information_row_mapper::flatten;
use crate::modules::case_information::adapters::outbound::command_gateway::CommandGateway;
use crate::modules::case_information::adapters::outbound::information_row::SEED_ID;
use crate::modules::case_information::core::information::Information;
use crate::modules::case_information::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::{debug, info};

pub struct CreateInformationHandler<TGateway>
where
    TGateway: CommandGateway + 'static,
{
    gateway: Arc<TGateway>,
}

impl<TGateway> CreateInformationHandler<TGateway>
where
    TGateway: CommandGateway + 'static,
{
    pub fn new(gateway: Arc<TGateway>) -> Self {
        Self { gateway }
    }

    /// Persists a new record and returns the identity assigned by the backend.
    pub async fn handle(&self, information: &Information) -> Result<String, ApplicationError> {
        debug!(acceptance_no = %information.acceptance_no, "creating information");
        let mut row = flatten(information);
        row.id = SEED_ID.to_string();

        let id = self.gateway.create_information(row).await?;
        info!(%id, acceptance_no = %information.acceptance_no, "information created");
        Ok(id)
    }
}
