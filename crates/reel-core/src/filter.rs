//! The filter engine: equality predicates over release year and kind.
//!
//! A [`View`] borrows rows from the [`Catalog`]; filtering never copies or
//! mutates a [`Title`]. Views are cheap and are rebuilt on every request.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::title::{Catalog, Title};

/// The current values of the two dashboard controls.
///
/// Absence is expressed by `None`, never by a sentinel year. An empty value
/// (`?year=`) deserialises to `None`, like an unselected dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
  #[serde(default, deserialize_with = "empty_as_none")]
  pub year: Option<i32>,
  #[serde(rename = "type", default, deserialize_with = "empty_as_none")]
  pub kind: Option<String>,
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: FromStr,
  T::Err: fmt::Display,
{
  match Option::<String>::deserialize(deserializer)? {
    None => Ok(None),
    Some(text) if text.trim().is_empty() => Ok(None),
    Some(text) => text.parse().map(Some).map_err(de::Error::custom),
  }
}

impl Selection {
  pub fn new(year: Option<i32>, kind: Option<impl Into<String>>) -> Self {
    Self { year, kind: kind.map(Into::into) }
  }

  /// The same selection with the kind predicate dropped.
  pub fn year_only(&self) -> Self {
    Self { year: self.year, kind: None }
  }

  /// The same selection with the year predicate dropped.
  pub fn kind_only(&self) -> Self {
    Self { year: None, kind: self.kind.clone() }
  }

  pub fn matches(&self, title: &Title) -> bool {
    let year_ok = self.year.is_none_or(|y| title.release_year == Some(y));
    let kind_ok = self
      .kind
      .as_deref()
      .is_none_or(|k| title.kind.as_deref() == Some(k));
    year_ok && kind_ok
  }
}

/// A borrowed subset of catalogue rows, in catalogue order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View<'a> {
  rows: Vec<&'a Title>,
}

impl<'a> View<'a> {
  /// Narrow this view further. Applying the same selection twice is a no-op.
  pub fn refine(&self, selection: &Selection) -> View<'a> {
    View {
      rows: self
        .rows
        .iter()
        .copied()
        .filter(|t| selection.matches(t))
        .collect(),
    }
  }

  pub fn iter(&self) -> impl Iterator<Item = &'a Title> + '_ {
    self.rows.iter().copied()
  }

  pub fn titles(&self) -> &[&'a Title] {
    &self.rows
  }

  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }
}

impl Catalog {
  /// Rows matching every predicate present in `selection`.
  pub fn view(&self, selection: &Selection) -> View<'_> {
    View {
      rows: self.titles().iter().filter(|t| selection.matches(t)).collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::title::RawTitle;

  fn catalog() -> Catalog {
    let row = |kind: &str, year: &str| RawTitle {
      kind: Some(kind.to_string()),
      release_year: Some(year.to_string()),
      ..Default::default()
    };
    Catalog::from_raw([
      row("Movie", "2020"),
      row("TV Show", "2020"),
      row("Movie", "2019"),
      row("TV Show", "2018"),
      RawTitle::default(),
    ])
  }

  #[test]
  fn empty_selection_returns_every_row_in_order() {
    let c = catalog();
    let view = c.view(&Selection::default());
    assert_eq!(view.len(), c.len());
    assert!(view.iter().zip(c.titles()).all(|(a, b)| std::ptr::eq(a, b)));
  }

  #[test]
  fn year_predicate() {
    let c = catalog();
    let view = c.view(&Selection::new(Some(2020), None::<String>));
    assert_eq!(view.len(), 2);
    assert!(view.iter().all(|t| t.release_year == Some(2020)));
  }

  #[test]
  fn kind_predicate_is_exact_match() {
    let c = catalog();
    assert_eq!(c.view(&Selection::new(None, Some("Movie"))).len(), 2);
    assert!(c.view(&Selection::new(None, Some("movie"))).is_empty());
  }

  #[test]
  fn both_predicates_are_anded_in_any_order() {
    let c = catalog();
    let both = Selection::new(Some(2020), Some("Movie"));
    let view = c.view(&both);
    assert_eq!(view.len(), 1);

    let year_first = c.view(&both.year_only()).refine(&both.kind_only());
    let kind_first = c.view(&both.kind_only()).refine(&both.year_only());
    assert_eq!(view, year_first);
    assert_eq!(view, kind_first);
  }

  #[test]
  fn filtering_is_idempotent() {
    let c = catalog();
    let sel = Selection::new(Some(2020), Some("TV Show"));
    let once = c.view(&sel);
    assert_eq!(once.refine(&sel), once);
  }

  #[test]
  fn unmatched_selection_is_empty_not_an_error() {
    let c = catalog();
    assert!(c.view(&Selection::new(Some(1850), None::<String>)).is_empty());
    assert!(c.view(&Selection::new(None, Some("Podcast"))).is_empty());
  }

  #[test]
  fn empty_values_deserialise_as_unset() {
    let sel: Selection =
      serde_json::from_value(serde_json::json!({ "year": "", "type": "" })).unwrap();
    assert_eq!(sel, Selection::default());

    let sel: Selection = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(sel, Selection::default());
  }

  #[test]
  fn present_values_deserialise() {
    let sel: Selection =
      serde_json::from_value(serde_json::json!({ "year": "2020", "type": "TV Show" })).unwrap();
    assert_eq!(sel, Selection::new(Some(2020), Some("TV Show")));

    let bad = serde_json::from_value::<Selection>(serde_json::json!({ "year": "soon" }));
    assert!(bad.is_err());
  }

  #[test]
  fn masks_drop_one_predicate() {
    let sel = Selection::new(Some(2020), Some("Movie"));
    assert_eq!(sel.year_only(), Selection::new(Some(2020), None::<String>));
    assert_eq!(sel.kind_only(), Selection::new(None, Some("Movie")));
  }
}
