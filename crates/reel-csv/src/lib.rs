//! Delimited-file loader for the reel catalogue.
//!
//! Reads a header-led CSV file, decodes each cell with the configured
//! [`Encoding`], and hands the raw rows to [`reel_core::derive`].

mod encoding;
mod load;

pub mod error;

pub use encoding::Encoding;
pub use error::{Error, Result};
pub use load::{REQUIRED_COLUMNS, load_catalog, load_path, load_reader};
