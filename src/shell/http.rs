use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::case_information::use_cases::create_information::inbound::http as create_http;
use crate::modules::case_information::use_cases::delete_information::inbound::http as delete_http;
use crate::modules::case_information::use_cases::export_information::inbound::http as export_http;
use crate::modules::case_information::use_cases::list_information::inbound::http as list_http;
use crate::modules::case_information::use_cases::update_information::inbound::http as update_http;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/create-information", post(create_http::handle))
        .route("/update-information", post(update_http::handle))
        .route("/list-information", get(list_http::handle))
        .route("/delete-information", post(delete_http::handle))
        .route("/export-information", post(export_http::handle))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
