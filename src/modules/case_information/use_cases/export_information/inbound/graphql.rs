use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::case_information::adapters::inbound::failure::{
    EXPORT_FAILED, graphql_failure,
};
use crate::modules::case_information::use_cases::export_information::handler::default_export_path;
use crate::shared::core::primitives::from_epoch_millis;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ExportInformationMutation;

#[Object]
impl ExportInformationMutation {
    /// Returns the path the report was saved to.
    async fn export_information(
        &self,
        context: &Context<'_>,
        from: i64,
        to: i64,
        path: Option<String>,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let (Some(from), Some(to)) = (from_epoch_millis(from), from_epoch_millis(to)) else {
            return Err(async_graphql::Error::new("export range is out of range"));
        };
        let path = path.unwrap_or_else(|| {
            default_export_path(&state.export_directory, &from, &to, &Utc::now())
        });

        state
            .export_handler
            .handle(&from, &to, &path)
            .await
            .map_err(|e| graphql_failure(&e, EXPORT_FAILED))
    }
}
