//! Movies vs TV shows pie.

use super::{tally, unzip};
use crate::{
  figure::{Figure, Trace},
  filter::View,
};

/// Rows per kind, in first-encounter order. Rows without a kind are skipped.
pub fn counts(view: &View<'_>) -> Vec<(String, u64)> {
  tally(view.iter().filter_map(|t| t.kind.as_deref()))
}

pub fn figure(view: &View<'_>) -> Figure {
  let (labels, values) = unzip(counts(view));
  Figure::new("Movies vs TV Shows", vec![Trace::Pie { labels, values }]).or_placeholder()
}
