use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::case_information::adapters::inbound::failure::{LIST_FAILED, failure_response};
use crate::modules::case_information::adapters::inbound::information_view::InformationPageView;
use crate::modules::case_information::core::query::{FilterMode, Order, QueryOption};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListInformationParams {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub order: Option<Order>,
    pub search: Option<String>,
    pub mode: Option<FilterMode>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListInformationParams>,
) -> impl IntoResponse {
    let query = QueryOption::new(
        params.offset.unwrap_or(0),
        params.limit.unwrap_or(state.default_limit),
        params.order.unwrap_or_default(),
        params.search,
    );

    match state
        .list_handler
        .handle(params.mode.unwrap_or_default(), query)
        .await
    {
        Ok(page) => Json(InformationPageView::from(page)).into_response(),
        Err(e) => failure_response(&e, LIST_FAILED),
    }
}
