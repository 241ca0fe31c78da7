use crate::modules::case_information::adapters::mappers::information_row_mapper::reconstruct;
use crate::modules::case_information::adapters::outbound::command_gateway::CommandGateway;
use crate::modules::case_information::core::information::Information;
use crate::modules::case_information::core::query::{FilterMode, Page, QueryOption};
use crate::modules::case_information::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::debug;

pub struct ListInformationHandler<TGateway>
where
    TGateway: CommandGateway + 'static,
{
    gateway: Arc<TGateway>,
}

impl<TGateway> ListInformationHandler<TGateway>
where
    TGateway: CommandGateway + 'static,
{
    pub fn new(gateway: Arc<TGateway>) -> Self {
        Self { gateway }
    }

    /// Fetches one page in the given filter mode and rebuilds the aggregates.
    pub async fn handle(
        &self,
        mode: FilterMode,
        query: QueryOption,
    ) -> Result<Page<Information>, ApplicationError> {
        let query = query.normalized();
        query.validate()?;
        debug!(
            ?mode,
            offset = query.offset,
            limit = query.limit,
            search = query.search.as_deref(),
            "listing information"
        );

        let (rows, total) = match mode {
            FilterMode::All => self.gateway.get_information_list(&query).await?,
            FilterMode::New => self.gateway.get_new_information_list(&query).await?,
        };
        let records = rows
            .into_iter()
            .map(reconstruct)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::from_backend(records, total))
    }
}
