//! cityhub-web — HTTP surface of the CityHub portal.
//!
//! [`router`] wires the HTML pages and the JSON API onto an [`AppContext`];
//! [`serve`] binds it and runs until Ctrl+C or SIGTERM.

use std::sync::Arc;

use anyhow::Context;
use axum::{response::Html, routing::get, Router};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use cityhub_core::config::Config;

pub mod error;
pub mod pages;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use pages::StaticPage;
pub use state::AppContext;

/// Build the application router over a shared context.
pub fn router(ctx: Arc<AppContext>) -> Router {
    let mut app = Router::new()
        .route("/", get(routes::index))
        .route("/city/{city_name}", get(routes::city_dashboard))
        .route("/schemes", get(routes::schemes_page))
        .route("/events", get(routes::events_page))
        .route("/api/cities", get(routes::api_cities))
        .route("/api/help-centers/{city_name}", get(routes::api_help_centers))
        .route("/api/search", get(routes::api_search))
        .route("/healthz", get(routes::healthz));

    for page in StaticPage::ALL {
        app = app.route(page.path(), get(move || async move { Html(page.render()) }));
    }

    app.layer(TraceLayer::new_for_http()).with_state(ctx)
}

/// Bind `config.server` and serve until a shutdown signal arrives.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let ctx = AppContext::new(&config);
    info!(data_dir = %ctx.loader.data_dir().display(), "serving datasets");

    let address = config.server.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(err) => {
                warn!(error = %err, "failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
