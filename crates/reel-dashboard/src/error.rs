//! Request error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by a dashboard handler.
///
/// Empty or partial data is never an error; those render as empty charts.
#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown chart: {0}")]
  UnknownChart(String),

  #[error("bad query: {0}")]
  BadQuery(String),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match &self {
      Error::UnknownChart(_) => StatusCode::NOT_FOUND,
      Error::BadQuery(_) => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
