//! Column derivation: raw cells to typed fields plus calculated columns.
//!
//! Every step is null-safe. Values that cannot be parsed become `None` or a
//! documented default; derivation never fails.

use chrono::{Datelike, NaiveDate};

use crate::title::{RawTitle, Title};

/// Stand-in for an empty `country` cell. Counted like any other country.
pub const MISSING_COUNTRY: &str = "missing";

/// Stand-in for an empty `duration` cell.
pub const MISSING_DURATION: &str = "0";

/// Accepted `date_added` layouts, tried in order. `%B` also accepts the
/// abbreviated month name.
const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%m/%d/%Y", "%Y-%m-%d"];

/// Derive a [`Title`] from one raw row.
pub fn title(raw: RawTitle) -> Title {
  let date_added = raw.date_added.as_deref().and_then(parse_date_added);
  let genre = raw.listed_in.as_deref().map(primary_genre);

  Title {
    show_id: raw.show_id,
    title: raw.title,
    kind: raw.kind,
    release_year: raw.release_year.as_deref().and_then(parse_year),
    date_added,
    years_added: date_added.map(|d| d.year()),
    country: raw.country.unwrap_or_else(|| MISSING_COUNTRY.to_string()),
    listed_in: raw.listed_in,
    genre,
    duration: raw.duration.unwrap_or_else(|| MISSING_DURATION.to_string()),
  }
}

/// Parse a `date_added` cell after trimming surrounding whitespace.
pub fn parse_date_added(text: &str) -> Option<NaiveDate> {
  let text = text.trim();
  if text.is_empty() {
    return None;
  }
  DATE_FORMATS
    .iter()
    .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

/// Parse a release year. Integral floats ("2019.0") are accepted since
/// spreadsheet exports sometimes write whole numbers that way.
pub fn parse_year(text: &str) -> Option<i32> {
  let text = text.trim();
  if let Ok(year) = text.parse::<i32>() {
    return Some(year);
  }
  let value = text.parse::<f64>().ok()?;
  (value.fract() == 0.0 && value.abs() <= f64::from(i32::MAX)).then_some(value as i32)
}

/// The text before the first comma of a `listed_in` cell, untrimmed.
pub fn primary_genre(listed_in: &str) -> String {
  listed_in
    .split_once(',')
    .map_or(listed_in, |(head, _)| head)
    .to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_long_form_dates_with_padding() {
    assert_eq!(
      parse_date_added("  September 25, 2021 "),
      NaiveDate::from_ymd_opt(2021, 9, 25)
    );
    assert_eq!(parse_date_added("Sep 5, 2021"), NaiveDate::from_ymd_opt(2021, 9, 5));
  }

  #[test]
  fn parses_numeric_dates() {
    assert_eq!(parse_date_added("1/1/2020"), NaiveDate::from_ymd_opt(2020, 1, 1));
    assert_eq!(parse_date_added("12/31/2019"), NaiveDate::from_ymd_opt(2019, 12, 31));
    assert_eq!(parse_date_added("2018-07-04"), NaiveDate::from_ymd_opt(2018, 7, 4));
  }

  #[test]
  fn unparseable_dates_become_none() {
    assert_eq!(parse_date_added(""), None);
    assert_eq!(parse_date_added("   "), None);
    assert_eq!(parse_date_added("sometime in 2020"), None);
    assert_eq!(parse_date_added("13/45/2020"), None);
  }

  #[test]
  fn years_added_follows_date_added() {
    let parsed = title(RawTitle {
      date_added: Some("March 3, 2017".into()),
      ..Default::default()
    });
    assert_eq!(parsed.years_added, Some(2017));

    let garbled = title(RawTitle {
      date_added: Some("not a date".into()),
      ..Default::default()
    });
    assert_eq!(garbled.date_added, None);
    assert_eq!(garbled.years_added, None);
  }

  #[test]
  fn release_year_is_optional_not_a_sentinel() {
    assert_eq!(title(RawTitle::default()).release_year, None);
    assert_eq!(parse_year(" 2019 "), Some(2019));
    assert_eq!(parse_year("2019.0"), Some(2019));
    assert_eq!(parse_year("2019.5"), None);
    assert_eq!(parse_year("n/a"), None);
  }

  #[test]
  fn fills_country_and_duration_defaults() {
    let t = title(RawTitle::default());
    assert_eq!(t.country, MISSING_COUNTRY);
    assert_eq!(t.duration, MISSING_DURATION);
    assert_eq!(t.genre, None);
  }

  #[test]
  fn genre_is_text_before_first_comma() {
    assert_eq!(primary_genre("Dramas, International Movies"), "Dramas");
    assert_eq!(primary_genre("Comedy,Drama"), "Comedy");
    assert_eq!(primary_genre("Documentaries"), "Documentaries");
  }

  #[test]
  fn derivation_is_deterministic() {
    let raw = RawTitle {
      kind: Some("Movie".into()),
      release_year: Some("2020".into()),
      date_added: Some("January 1, 2020".into()),
      listed_in: Some("Horror Movies, Thrillers".into()),
      ..Default::default()
    };
    assert_eq!(title(raw.clone()), title(raw));
  }
}
