//! Top genres bar chart.

use super::{rank, tally, unzip};
use crate::{
  figure::{Figure, Trace},
  filter::View,
};

/// How many genres the chart shows.
pub const TOP_N: usize = 10;

/// The [`TOP_N`] most frequent genres, most frequent first. Rows without a
/// genre are not counted. Ties keep first-encounter order.
pub fn counts(view: &View<'_>) -> Vec<(String, u64)> {
  let mut ranked = rank(tally(view.iter().filter_map(|t| t.genre.as_deref())));
  ranked.truncate(TOP_N);
  ranked
}

pub fn figure(view: &View<'_>) -> Figure {
  let (x, y) = unzip(counts(view));
  Figure::new("Top 10 Genres", vec![Trace::Bar { x, y }])
    .with_axes("Genre", "Count")
    .or_placeholder()
}
