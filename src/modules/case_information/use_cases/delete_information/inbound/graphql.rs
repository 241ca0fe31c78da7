use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::case_information::adapters::inbound::failure::{
    DELETE_FAILED, graphql_failure,
};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteInformationMutation;

#[Object]
impl DeleteInformationMutation {
    async fn delete_information(&self, context: &Context<'_>, ids: Vec<ID>) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let ids: Vec<String> = ids.into_iter().map(|id| id.0).collect();

        state
            .delete_handler
            .handle(&ids)
            .await
            .map_err(|e| graphql_failure(&e, DELETE_FAILED))?;

        Ok(true)
    }
}
