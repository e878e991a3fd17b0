//! Core types and chart logic for the reel catalogue dashboard.
//!
//! This crate is deliberately free of HTTP and file I/O. It turns raw rows
//! into a derived [`Catalog`], filters it into borrowed [`View`]s, and builds
//! declarative [`Figure`]s from those views.
//!
//! ```text
//!  RawTitle ──derive──▶ Catalog ──Selection──▶ View ──charts──▶ Figure
//! ```

pub mod charts;
pub mod derive;
pub mod figure;
pub mod filter;
pub mod title;

pub use charts::{Chart, Inputs};
pub use figure::Figure;
pub use filter::{Selection, View};
pub use title::{Catalog, RawTitle, Title};
