//! Titles added per calendar month.

use std::{collections::BTreeMap, fmt};

use chrono::Datelike;

use crate::{
  figure::{Figure, Mode, Trace},
  filter::View,
};

/// A year-month bucket. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
  pub year:  i32,
  pub month: u32,
}

impl fmt::Display for Month {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:04}-{:02}", self.year, self.month)
  }
}

/// Per-month counts in ascending order. Rows without `date_added` are
/// skipped; months with no rows are absent.
pub fn counts(view: &View<'_>) -> Vec<(Month, u64)> {
  let mut buckets: BTreeMap<Month, u64> = BTreeMap::new();
  for date in view.iter().filter_map(|t| t.date_added) {
    let month = Month { year: date.year(), month: date.month() };
    *buckets.entry(month).or_default() += 1;
  }
  buckets.into_iter().collect()
}

pub fn figure(view: &View<'_>) -> Figure {
  let (x, y): (Vec<String>, Vec<u64>) = counts(view)
    .into_iter()
    .map(|(month, n)| (month.to_string(), n))
    .unzip();
  Figure::new("Content Added Over Time", vec![Trace::Line {
    mode: Mode::Lines,
    x,
    y,
  }])
  .with_axes("Month", "Count")
  .or_placeholder()
}
