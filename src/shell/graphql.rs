use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::case_information::use_cases::create_information::inbound::graphql::CreateInformationMutation;
use crate::modules::case_information::use_cases::delete_information::inbound::graphql::DeleteInformationMutation;
use crate::modules::case_information::use_cases::export_information::inbound::graphql::ExportInformationMutation;
pub use crate::modules::case_information::use_cases::list_information::inbound::graphql::QueryRoot;
use crate::modules::case_information::use_cases::update_information::inbound::graphql::UpdateInformationMutation;
pub use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    CreateInformationMutation,
    UpdateInformationMutation,
    DeleteInformationMutation,
    ExportInformationMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
