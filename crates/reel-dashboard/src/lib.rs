//! Web dashboard for the reel catalogue.
//!
//! Exposes an axum [`Router`] serving one HTML page and the JSON endpoints
//! its script calls. All chart logic lives in [`reel_core`]; this crate only
//! maps requests onto it.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/` | Dashboard page |
//! | `GET`  | `/api/controls` | Dropdown options |
//! | `GET`  | `/api/charts/{chart}` | Optional `?year=<year>&type=<type>` |
//! | `GET`  | `/healthz` | Liveness |

pub mod config;
pub mod error;
pub mod handlers;

pub use config::DashboardConfig;
pub use error::Error;

use std::sync::Arc;

use axum::{Router, routing::get};
use reel_core::Catalog;
use tower_http::trace::TraceLayer;

use handlers::{charts, controls, controls::Controls, page};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared, read-only state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
  pub catalog:  Arc<Catalog>,
  pub controls: Arc<Controls>,
  pub config:   Arc<DashboardConfig>,
}

impl AppState {
  /// Freeze the catalogue and compute the dropdown options once.
  pub fn new(catalog: Catalog, config: DashboardConfig) -> Self {
    let controls = Controls::from_catalog(&catalog);
    Self {
      catalog:  Arc::new(catalog),
      controls: Arc::new(controls),
      config:   Arc::new(config),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the dashboard [`Router`].
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/",                   get(page::handler))
    .route("/healthz",            get(|| async { "ok" }))
    .route("/api/controls",       get(controls::handler))
    .route("/api/charts/{chart}", get(charts::handler))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
