//! Titles per country choropleth.
//!
//! Country names are used verbatim as the map's join key. Spellings the map
//! does not know simply do not render.

use super::{rank, tally, unzip};
use crate::{
  figure::{Figure, Trace},
  filter::View,
};

const SEPARATOR: &str = ", ";

/// Per-country counts, most frequent first. A row listing several countries
/// counts once towards each.
pub fn counts(view: &View<'_>) -> Vec<(String, u64)> {
  rank(tally(
    view
      .iter()
      .flat_map(|t| t.country.split(SEPARATOR))
      .filter(|c| !c.is_empty()),
  ))
}

pub fn figure(view: &View<'_>) -> Figure {
  let (locations, z) = unzip(counts(view));
  Figure::new("Content by Country", vec![Trace::Choropleth {
    locations,
    z,
    locationmode: "country names".to_string(),
    colorscale: "Reds".to_string(),
  }])
  .or_placeholder()
}
