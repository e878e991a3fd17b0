//! The five chart builders and the wiring that says which control each one
//! reacts to.
//!
//! Every builder is a pure function from a [`View`] to a [`Figure`]. An
//! empty view produces a placeholder figure, never an error.

pub mod country;
pub mod duration;
pub mod genre;
pub mod timeline;
pub mod types;

use std::collections::HashMap;

use serde::Serialize;

use crate::{figure::Figure, filter::Selection, title::Catalog};

// ─── Wiring ──────────────────────────────────────────────────────────────────

/// Which controls a chart reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Inputs {
  pub year: bool,
  #[serde(rename = "type")]
  pub kind: bool,
}

impl Inputs {
  pub const BOTH: Inputs = Inputs { year: true, kind: true };
  pub const YEAR: Inputs = Inputs { year: true, kind: false };
  pub const KIND: Inputs = Inputs { year: false, kind: true };

  /// Drop every predicate this chart does not react to.
  pub fn mask(self, selection: &Selection) -> Selection {
    Selection {
      year: if self.year { selection.year } else { None },
      kind: if self.kind { selection.kind.clone() } else { None },
    }
  }
}

/// The dashboard's chart panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chart {
  Genre,
  Timeline,
  TypePie,
  DurationScatter,
  CountryMap,
}

impl Chart {
  /// Panels in page order.
  pub const ALL: [Chart; 5] = [
    Chart::Genre,
    Chart::Timeline,
    Chart::TypePie,
    Chart::DurationScatter,
    Chart::CountryMap,
  ];

  pub fn slug(self) -> &'static str {
    match self {
      Chart::Genre => "genre",
      Chart::Timeline => "timeline",
      Chart::TypePie => "type-pie",
      Chart::DurationScatter => "duration-scatter",
      Chart::CountryMap => "country-map",
    }
  }

  pub fn from_slug(slug: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|c| c.slug() == slug)
  }

  /// The pie ignores the type control and the scatter ignores the year
  /// control. Both asymmetries are pinned by tests.
  pub fn inputs(self) -> Inputs {
    match self {
      Chart::Genre | Chart::Timeline | Chart::CountryMap => Inputs::BOTH,
      Chart::TypePie => Inputs::YEAR,
      Chart::DurationScatter => Inputs::KIND,
    }
  }

  /// Mask `selection` to this chart's inputs, filter, and build the figure.
  pub fn render(self, catalog: &Catalog, selection: &Selection) -> Figure {
    let selection = self.inputs().mask(selection);
    let view = catalog.view(&selection);
    match self {
      Chart::Genre => genre::figure(&view),
      Chart::Timeline => timeline::figure(&view),
      Chart::TypePie => types::figure(&view),
      Chart::DurationScatter => duration::figure(&view, selection.kind.as_deref()),
      Chart::CountryMap => country::figure(&view),
    }
  }
}

// ─── Counting helpers ────────────────────────────────────────────────────────

/// Count occurrences, keeping keys in first-encounter order.
pub(crate) fn tally<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<(String, u64)> {
  let mut index: HashMap<&'a str, usize> = HashMap::new();
  let mut counts: Vec<(String, u64)> = Vec::new();
  for item in items {
    match index.get(item) {
      Some(&i) => counts[i].1 += 1,
      None => {
        index.insert(item, counts.len());
        counts.push((item.to_string(), 1));
      }
    }
  }
  counts
}

/// Sort by count descending. Ties keep their first-encounter order.
pub(crate) fn rank(mut counts: Vec<(String, u64)>) -> Vec<(String, u64)> {
  counts.sort_by(|a, b| b.1.cmp(&a.1));
  counts
}

pub(crate) fn unzip(counts: Vec<(String, u64)>) -> (Vec<String>, Vec<u64>) {
  counts.into_iter().unzip()
}
