use std::sync::Arc;

use marketplace_api::routes;
use marketplace_api::state::AppState;
use marketplace_sdk::{config, MarketplaceSdk};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let sdk = MarketplaceSdk::builder()
        .build()
        .expect("failed to initialize marketplace SDK");
    info!(%sdk, "SDK ready");

    let state = Arc::new(AppState::new(sdk));
    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", config::port());
    info!("API listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
