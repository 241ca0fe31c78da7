use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use case_information::modules::case_information::adapters::outbound::command_gateway_in_memory::InMemoryCommandGateway;
use case_information::shell::config::AppConfig;
use case_information::shell::graphql::GRAPHQL_PATH;
use case_information::shell::http::router;
use case_information::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))
        .context("invalid log filter")?;
    fmt().with_env_filter(filter).init();

    // In-memory backend for now
    let gateway = Arc::new(InMemoryCommandGateway::new());
    let state = AppState::new(
        gateway,
        config.listing.default_limit,
        config.export.directory.clone(),
    );

    let addr = config.socket_addr().context("invalid http address")?;
    tracing::info!("HTTP endpoint: http://{}", addr);
    tracing::info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
