//! Title records and the [`Catalog`] that owns them.
//!
//! A [`RawTitle`] is one row exactly as read from the source file. The
//! deriver turns it into a [`Title`], which carries the filled defaults and
//! the derived columns. The catalog is built once and never mutated.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;

use crate::derive;

// ─── Raw row ─────────────────────────────────────────────────────────────────

/// One row of the source table. Empty cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTitle {
  pub show_id:      Option<String>,
  pub title:        Option<String>,
  /// The `type` column ("Movie", "TV Show", ...).
  pub kind:         Option<String>,
  pub release_year: Option<String>,
  pub date_added:   Option<String>,
  pub country:      Option<String>,
  pub listed_in:    Option<String>,
  pub duration:     Option<String>,
}

// ─── Derived row ─────────────────────────────────────────────────────────────

/// A catalogue entry after column derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
  pub show_id:      Option<String>,
  pub title:        Option<String>,
  pub kind:         Option<String>,
  /// `None` when the cell was empty or not an integer. Never a sentinel.
  pub release_year: Option<i32>,
  pub date_added:   Option<NaiveDate>,
  /// Calendar year of `date_added`; `None` exactly when `date_added` is.
  pub years_added:  Option<i32>,
  /// Comma-separated country names, or [`derive::MISSING_COUNTRY`].
  pub country:      String,
  pub listed_in:    Option<String>,
  /// First comma-separated token of `listed_in`; `None` exactly when
  /// `listed_in` is.
  pub genre:        Option<String>,
  /// Free text such as "90 min" or "3 Seasons", or
  /// [`derive::MISSING_DURATION`].
  pub duration:     String,
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// The immutable, fully derived table. Built once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
  titles: Vec<Title>,
}

impl Catalog {
  /// Derive every raw row and take ownership of the result.
  pub fn from_raw(rows: impl IntoIterator<Item = RawTitle>) -> Self {
    Self::from_titles(rows.into_iter().map(derive::title).collect())
  }

  pub fn from_titles(titles: Vec<Title>) -> Self {
    Self { titles }
  }

  pub fn titles(&self) -> &[Title] {
    &self.titles
  }

  pub fn len(&self) -> usize {
    self.titles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.titles.is_empty()
  }

  /// Distinct positive release years, ascending.
  pub fn release_years(&self) -> Vec<i32> {
    self
      .titles
      .iter()
      .filter_map(|t| t.release_year)
      .filter(|&y| y > 0)
      .collect::<BTreeSet<_>>()
      .into_iter()
      .collect()
  }

  /// Distinct title kinds in the order they first appear.
  pub fn kinds(&self) -> Vec<String> {
    let mut seen = HashSet::new();
    self
      .titles
      .iter()
      .filter_map(|t| t.kind.as_deref())
      .filter(|k| seen.insert(*k))
      .map(str::to_owned)
      .collect()
  }
}
