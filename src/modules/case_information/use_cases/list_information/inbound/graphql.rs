use async_graphql::{Context, Enum, Object, Result as GqlResult};

use crate::modules::case_information::adapters::inbound::failure::{LIST_FAILED, graphql_failure};
use crate::modules::case_information::adapters::inbound::information_view::InformationPageView;
use crate::modules::case_information::core::query::{FilterMode, Order, QueryOption};
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "Order")]
pub enum GqlOrder {
    Asc,
    Desc,
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "FilterMode")]
pub enum GqlFilterMode {
    All,
    New,
}

impl From<GqlOrder> for Order {
    fn from(v: GqlOrder) -> Self {
        match v {
            GqlOrder::Asc => Order::Asc,
            GqlOrder::Desc => Order::Desc,
        }
    }
}

impl From<GqlFilterMode> for FilterMode {
    fn from(v: GqlFilterMode) -> Self {
        match v {
            GqlFilterMode::All => FilterMode::All,
            GqlFilterMode::New => FilterMode::New,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn information_list(
        &self,
        context: &Context<'_>,
        offset: Option<u64>,
        limit: Option<u64>,
        order: Option<GqlOrder>,
        search: Option<String>,
        mode: Option<GqlFilterMode>,
    ) -> GqlResult<InformationPageView> {
        let state = context.data_unchecked::<AppState>();
        let query = QueryOption::new(
            offset.unwrap_or(0),
            limit.unwrap_or(state.default_limit),
            order.map(Into::into).unwrap_or_default(),
            search,
        );

        let page = state
            .list_handler
            .handle(mode.map(Into::into).unwrap_or_default(), query)
            .await
            .map_err(|e| graphql_failure(&e, LIST_FAILED))?;

        Ok(page.into())
    }
}
