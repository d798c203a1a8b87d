//! JSON HTTP API over the mortgage calculator.
//!
//! - `POST /api/calculate-mortgage`: formatted repayment figures
//! - `GET /api/default-rate`: the default annual interest rate
//! - `GET /health`: liveness probe

pub mod error;
pub mod handlers;

use crate::application::calculator::MortgageCalculator;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<MortgageCalculator>,
}

pub fn build_router(calculator: Arc<MortgageCalculator>) -> Router {
    Router::new()
        .route(
            "/api/calculate-mortgage",
            post(handlers::calculate_mortgage).fallback(handlers::method_not_allowed),
        )
        .route("/api/default-rate", get(handlers::default_rate))
        .route("/health", get(handlers::health))
        .with_state(AppState { calculator })
        .layer(TraceLayer::new_for_http())
}

/// Serves the API on `listener` until Ctrl-C is received.
pub async fn serve(listener: TcpListener, calculator: Arc<MortgageCalculator>) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "mortgage API listening");

    axum::serve(listener, build_router(calculator))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
