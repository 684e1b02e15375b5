use anyhow::Context;
use grocery_cart_rust::cart::AppState;
use grocery_cart_rust::catalog::Catalog;
use grocery_cart_rust::config::{Config, DEFAULT_LOG_FILTER};
use grocery_cart_rust::router::create_app_router;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Catalog is fixed for the process lifetime; the cart starts empty
    let state = Arc::new(AppState::new(Catalog::seeded()));

    let app = create_app_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
