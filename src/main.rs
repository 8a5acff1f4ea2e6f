use std::sync::Arc;

use product_comparison_service::infrastructure::JsonProductRepository;
use product_comparison_service::{Config, ProductService, build_app, logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    logger::init_logger(&config.log_level);

    let repository = JsonProductRepository::load(&config.products_file);
    let service = ProductService::new(Arc::new(repository));
    let app = build_app(service);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "⚖️ Product comparison service running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
