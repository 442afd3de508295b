// article-generation-service/src/main.rs

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use article_generation_service::config::Config;
use article_generation_service::context::SiteDirectory;
use article_generation_service::http::{self, AppState};
use article_generation_service::image::ImageSynthesizer;
use article_generation_service::pipeline::ArticlePipeline;
use article_generation_service::storage::AssetPublisher;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Print to stderr BEFORE logging initialization to catch early failures
    eprintln!("Starting article-generation-service...");

    // Load configuration
    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("FATAL: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.service.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!(
        service = %config.service.name,
        version = env!("CARGO_PKG_VERSION"),
        "Starting Article Generation Service"
    );

    // Assemble the pipeline
    let loader = Arc::new(SiteDirectory::new(&config.sites.path));
    let publisher = AssetPublisher::from_config(&config.storage).await;
    let synthesizer = ImageSynthesizer::new()?;
    let pipeline = Arc::new(ArticlePipeline::new(loader, publisher, synthesizer));

    let app = http::router(AppState { pipeline }).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.service.host, config.service.port).parse()?;
    info!(%addr, "Listening for generation requests");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(err) => tracing::error!("Unable to listen for shutdown signal: {}", err),
    }
}
