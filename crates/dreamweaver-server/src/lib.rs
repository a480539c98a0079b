//! HTTP surface for Dreamweaver.
//!
//! Endpoints:
//!   GET  /                     -> page shell
//!   GET  /static/js/script.js  -> client script
//!   POST /generate             -> synthesize and store a dream
//!   GET  /dreams               -> every stored dream, newest first

pub mod error;
mod page;
mod routes;
pub mod service;

pub use error::ServiceError;
pub use page::{INDEX_HTML, SCRIPT_JS};
pub use service::{
    DreamService, DreamSummary, GENERATE_MESSAGE, GenerateRequest, GenerateResponse, Location,
    RngSource,
};

use axum::Router;
use axum::routing::{get, post};
use log::info;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build the application router around a dream service.
pub fn router(service: DreamService) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/static/js/script.js", get(routes::script))
        .route("/generate", post(routes::generate))
        .route("/dreams", get(routes::list_dreams))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        )
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Serve the router on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    service: DreamService,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!("dreamweaver listening on http://{addr}");
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("dreamweaver stopped");
    Ok(())
}
