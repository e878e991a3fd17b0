//! Error types for the catalogue loader. Every variant is fatal at startup.

use std::path::PathBuf;

use thiserror::Error;

use crate::Encoding;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot open {path:?}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed delimited data: {0}")]
  Csv(#[from] csv::Error),

  #[error("missing required column {0:?}")]
  MissingColumn(&'static str),

  #[error("line {line}: column {column:?} is not valid {encoding}")]
  Encoding {
    line:     u64,
    column:   String,
    encoding: Encoding,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
