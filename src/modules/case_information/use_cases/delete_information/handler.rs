use crate::modules::case_information::adapters::outbound::command_gateway::CommandGateway;
use crate::modules::case_information::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::{debug, info};

pub struct DeleteInformationHandler<TGateway>
where
    TGateway: CommandGateway + 'static,
{
    gateway: Arc<TGateway>,
}

impl<TGateway> DeleteInformationHandler<TGateway>
where
    TGateway: CommandGateway + 'static,
{
    pub fn new(gateway: Arc<TGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, ids: &[String]) -> Result<(), ApplicationError> {
        if ids.is_empty() {
            return Ok(());
        }
        if ids.iter().any(|id| id.trim().is_empty()) {
            return Err(ApplicationError::Invalid("blank id in delete request".to_string()));
        }
        debug!(count = ids.len(), "deleting information");

        self.gateway.delete_information(ids).await?;
        info!(count = ids.len(), "information deleted");
        Ok(())
    }
}
