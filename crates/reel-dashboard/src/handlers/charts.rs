//! Handler for `GET /api/charts/{chart}`.
//!
//! Query params are the current control values: `year` and `type`, both
//! optional. Each chart only sees the controls it is wired to.

use axum::{
  Json,
  extract::{Path, Query, State, rejection::QueryRejection},
};
use reel_core::{Chart, Figure, Selection};

use crate::{AppState, error::Error};

/// `GET /api/charts/{chart}[?year=<year>][&type=<type>]`
pub async fn handler(
  State(state): State<AppState>,
  Path(slug): Path<String>,
  query: Result<Query<Selection>, QueryRejection>,
) -> Result<Json<Figure>, Error> {
  let chart = Chart::from_slug(&slug).ok_or(Error::UnknownChart(slug))?;
  let Query(selection) = query.map_err(|e| Error::BadQuery(e.body_text()))?;

  let figure = chart.render(&state.catalog, &selection);
  tracing::debug!(
    chart = chart.slug(),
    year = selection.year,
    kind = selection.kind.as_deref(),
    points = figure.points(),
    "rendered chart"
  );
  Ok(Json(figure))
}
