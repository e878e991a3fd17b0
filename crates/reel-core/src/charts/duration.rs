//! Duration trends scatter: release year against running time.
//!
//! Durations are free text ("90 min", "3 Seasons"). The leading number is
//! taken as minutes when the selected type is [`MOVIE`]; otherwise it is
//! read as a season count and multiplied by [`MINUTES_PER_SEASON`]. The
//! multiplier depends on the *selected* type, not the row's own, so an
//! unfiltered chart scales movie runtimes too.

use super::tally;
use crate::{
  figure::{Figure, Mode, Trace},
  filter::View,
};

/// The type value whose durations are already in minutes.
pub const MOVIE: &str = "Movie";

/// Rough running time of one season. An approximation, not a measurement.
pub const MINUTES_PER_SEASON: u32 = 45;

/// Group name for rows with no type.
const UNKNOWN_KIND: &str = "unknown";

/// The first run of ASCII digits in `text`.
pub fn leading_number(text: &str) -> Option<u32> {
  let start = text.find(|c: char| c.is_ascii_digit())?;
  let rest = &text[start..];
  let end = rest
    .find(|c: char| !c.is_ascii_digit())
    .unwrap_or(rest.len());
  rest[..end].parse().ok()
}

/// Approximate minutes for a duration cell given the selected type.
pub fn minutes(duration: &str, selected: Option<&str>) -> Option<u32> {
  let n = leading_number(duration)?;
  match selected {
    Some(MOVIE) => Some(n),
    _ => n.checked_mul(MINUTES_PER_SEASON),
  }
}

/// One plotted row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
  pub kind:         String,
  pub release_year: i32,
  pub minutes:      u32,
  pub label:        Option<String>,
}

/// Plottable rows. Rows without digits in `duration` or without a release
/// year are omitted.
pub fn points(view: &View<'_>, selected: Option<&str>) -> Vec<Point> {
  view
    .iter()
    .filter_map(|t| {
      Some(Point {
        kind:         t.kind.clone().unwrap_or_else(|| UNKNOWN_KIND.to_string()),
        release_year: t.release_year?,
        minutes:      minutes(&t.duration, selected)?,
        label:        t.title.clone(),
      })
    })
    .collect()
}

/// One marker trace per type, in first-encounter order.
pub fn figure(view: &View<'_>, selected: Option<&str>) -> Figure {
  let points = points(view, selected);
  let groups = tally(points.iter().map(|p| p.kind.as_str()));

  let data = groups
    .into_iter()
    .map(|(kind, _)| {
      let members = points.iter().filter(|p| p.kind == kind);
      let mut x = Vec::new();
      let mut y = Vec::new();
      let mut text = Vec::new();
      for p in members {
        x.push(p.release_year);
        y.push(p.minutes);
        text.push(p.label.clone().unwrap_or_default());
      }
      if text.iter().all(String::is_empty) {
        text.clear();
      }
      Trace::Markers { mode: Mode::Markers, name: kind, x, y, text }
    })
    .collect();

  Figure::new("Duration Trends", data)
    .with_axes("release_year", "Duration (min)")
    .or_placeholder()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    filter::Selection,
    title::{Catalog, RawTitle},
  };

  #[test]
  fn extracts_first_digit_run() {
    assert_eq!(leading_number("90 min"), Some(90));
    assert_eq!(leading_number("3 Seasons"), Some(3));
    assert_eq!(leading_number("Season 12"), Some(12));
    assert_eq!(leading_number("min"), None);
    assert_eq!(leading_number(""), None);
  }

  #[test]
  fn movie_durations_are_minutes() {
    assert_eq!(minutes("90 min", Some("Movie")), Some(90));
  }

  #[test]
  fn other_selections_scale_by_season_length() {
    assert_eq!(minutes("3 Seasons", Some("TV Show")), Some(135));
    assert_eq!(minutes("3 Seasons", None), Some(135));
    // Unfiltered: even movie rows get the season multiplier.
    assert_eq!(minutes("90 min", None), Some(90 * MINUTES_PER_SEASON));
  }

  #[test]
  fn digitless_durations_are_omitted() {
    assert_eq!(minutes("unknown", None), None);
    assert_eq!(minutes("99999999999 min", Some("Movie")), None);
  }

  #[test]
  fn oversized_numbers_are_omitted_not_wrapped() {
    assert_eq!(minutes("4294967295 min", Some(MOVIE)), Some(u32::MAX));
    assert_eq!(minutes("4294967296 min", Some(MOVIE)), None);
    // Fits in u32 but not once scaled by the season length.
    assert_eq!(minutes("100000000 Seasons", None), None);

    let catalog = Catalog::from_raw([
      row("TV Show", Some("2020"), Some("100000000 Seasons")),
      row("TV Show", Some("2020"), Some("2 Seasons")),
    ]);
    let pts = points(&catalog.view(&Selection::default()), None);
    assert_eq!(pts.len(), 1);
    assert_eq!(pts[0].minutes, 90);
  }

  fn row(kind: &str, year: Option<&str>, duration: Option<&str>) -> RawTitle {
    RawTitle {
      kind: Some(kind.to_string()),
      release_year: year.map(str::to_string),
      duration: duration.map(str::to_string),
      ..Default::default()
    }
  }

  #[test]
  fn groups_points_by_kind() {
    let c = Catalog::from_raw([
      row("Movie", Some("2019"), Some("100 min")),
      row("TV Show", Some("2020"), Some("2 Seasons")),
      row("Movie", Some("2020"), Some("80 min")),
      row("Movie", None, Some("95 min")),
      row("TV Show", Some("2021"), Some("n/a")),
    ]);
    let fig = figure(&c.view(&Selection::default()), None);
    assert_eq!(fig.data.len(), 2);
    match &fig.data[0] {
      Trace::Markers { name, x, y, .. } => {
        assert_eq!(name, "Movie");
        assert_eq!(x, &vec![2019, 2020]);
        assert_eq!(y, &vec![4500, 3600]);
      }
      other => panic!("expected markers, got {other:?}"),
    }
    assert_eq!(fig.points(), 3);
  }

  #[test]
  fn missing_duration_plots_at_zero() {
    let c = Catalog::from_raw([row("Movie", Some("2020"), None)]);
    let pts = points(&c.view(&Selection::default()), Some("Movie"));
    assert_eq!(pts.len(), 1);
    assert_eq!(pts[0].minutes, 0);
  }

  #[test]
  fn empty_view_renders_placeholder() {
    let c = Catalog::default();
    let fig = figure(&c.view(&Selection::default()), Some("Movie"));
    assert!(fig.data.is_empty());
    assert!(fig.is_placeholder());
  }
}
