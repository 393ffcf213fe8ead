//! Service entrypoint

use anyhow::Result;
use shop_orders::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::load()?;

    let downstream = Arc::new(HttpDownstreamClient::new(
        config.customer_service_url.as_str(),
        config.item_service_url.as_str(),
        config.downstream_timeout(),
    )?);

    let aggregator = OrderAggregator::new(
        Arc::new(InMemoryOrderStore::new()),
        Arc::new(InMemoryOrderDetailStore::new()),
        downstream,
    );

    let app = build_router(AppState::new(aggregator));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        customer_service = %config.customer_service_url,
        item_service = %config.item_service_url,
        "shop-orders listening"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
