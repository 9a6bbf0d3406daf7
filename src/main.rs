use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Router,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use imgconv_web::config::app::AppConfig;
use imgconv_web::image::image_rs_processor::ImageRsProcessor;
use imgconv_web::image::processor::ImageProcessor;
use imgconv_web::web::convert::convert_handler::convert_handler;
use imgconv_web::web::convert::converter::ConvertService;
use imgconv_web::web::cors::build_cors;
use imgconv_web::web::fallback::not_found;
use imgconv_web::web::health::health;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log levels are configurable via RUST_LOG, e.g.
    // `RUST_LOG=imgconv_web=debug,tower_http=trace`.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = AppConfig::from_env();

    let processor: Arc<dyn ImageProcessor> = Arc::new(ImageRsProcessor::new(cfg.image.avif_speed));
    let service = Arc::new(ConvertService::new(processor));

    let app = Router::new()
        .route("/api/convert", post(convert_handler))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(Extension(service))
        .layer(Extension(cfg.image.clone()))
        .layer(DefaultBodyLimit::max(cfg.http.max_body_bytes))
        .layer(build_cors(&cfg.cors));

    let addr = cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        address = %listener.local_addr()?,
        max_body_bytes = cfg.http.max_body_bytes,
        default_quality = cfg.image.default_quality,
        "server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server shut down");
    Ok(())
}

/// Resolves on SIGINT (Ctrl+C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
