use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::case_information::adapters::inbound::failure::{SAVE_FAILED, graphql_failure};
use crate::modules::case_information::adapters::inbound::information_input::InformationInput;
use crate::modules::case_information::core::information::Information;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateInformationMutation;

#[Object]
impl CreateInformationMutation {
    async fn create_information(
        &self,
        context: &Context<'_>,
        input: InformationInput,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let information = Information::try_from(input)?;

        let id = state
            .create_handler
            .handle(&information)
            .await
            .map_err(|e| graphql_failure(&e, SAVE_FAILED))?;

        Ok(ID(id))
    }
}
