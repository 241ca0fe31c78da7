// Latest-wins wrapper around the list use case.
//
// Interactive callers fire a listing on every search or filter change. Each request takes a
// ticket from a monotonically increasing counter, and an answer is only delivered when its ticket
// is still the latest issued. Older answers, successful or not, come back as `Superseded`.

use crate::modules::case_information::adapters::outbound::command_gateway::CommandGateway;
use crate::modules::case_information::core::information::Information;
use crate::modules::case_information::core::query::{FilterMode, Page, QueryOption};
use crate::modules::case_information::use_cases::errors::ApplicationError;
use crate::modules::case_information::use_cases::list_information::handler::ListInformationHandler;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
pub enum ListOutcome {
    Fresh(Page<Information>),
    Superseded { ticket: u64, latest: u64 },
}

pub struct LatestListing<TGateway>
where
    TGateway: CommandGateway + 'static,
{
    handler: Arc<ListInformationHandler<TGateway>>,
    latest: AtomicU64,
}

impl<TGateway> LatestListing<TGateway>
where
    TGateway: CommandGateway + 'static,
{
    pub fn new(handler: Arc<ListInformationHandler<TGateway>>) -> Self {
        Self {
            handler,
            latest: AtomicU64::new(0),
        }
    }

    pub fn latest_ticket(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    pub async fn request(
        &self,
        mode: FilterMode,
        query: QueryOption,
    ) -> Result<ListOutcome, ApplicationError> {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.handler.handle(mode, query).await;

        let latest = self.latest_ticket();
        if ticket != latest {
            debug!(ticket, latest, "dropping superseded listing");
            return Ok(ListOutcome::Superseded { ticket, latest });
        }
        result.map(ListOutcome::Fresh)
    }
}
