//! Handler for `GET /api/controls`: the dropdown options.

use axum::{Json, extract::State};
use reel_core::Catalog;
use serde::Serialize;

use crate::AppState;

/// Options for the two filter dropdowns, fixed at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Controls {
  /// Distinct positive release years, ascending.
  pub years: Vec<i32>,
  /// Distinct types in the order they appear in the file.
  pub types: Vec<String>,
}

impl Controls {
  pub fn from_catalog(catalog: &Catalog) -> Self {
    Self {
      years: catalog.release_years(),
      types: catalog.kinds(),
    }
  }
}

/// `GET /api/controls`
pub async fn handler(State(state): State<AppState>) -> Json<Controls> {
  Json(Controls::clone(&state.controls))
}
