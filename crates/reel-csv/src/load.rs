//! Reading rows and building the catalogue.

use std::{fs::File, io, path::Path};

use reel_core::{Catalog, RawTitle, Title, derive};

use crate::{Encoding, Error, Result};

/// Columns that must appear in the header row.
pub const REQUIRED_COLUMNS: [&str; 6] = [
  "type",
  "release_year",
  "date_added",
  "country",
  "listed_in",
  "duration",
];

// ─── Header lookup ───────────────────────────────────────────────────────────

struct Columns {
  show_id:      Option<usize>,
  title:        Option<usize>,
  kind:         usize,
  release_year: usize,
  date_added:   usize,
  country:      usize,
  listed_in:    usize,
  duration:     usize,
}

impl Columns {
  fn locate(names: &[String]) -> Result<Self> {
    let find = |name: &str| names.iter().position(|n| n == name);
    let require = |name: &'static str| find(name).ok_or(Error::MissingColumn(name));
    let [kind, release_year, date_added, country, listed_in, duration] =
      REQUIRED_COLUMNS;

    Ok(Self {
      show_id:      find("show_id"),
      title:        find("title"),
      kind:         require(kind)?,
      release_year: require(release_year)?,
      date_added:   require(date_added)?,
      country:      require(country)?,
      listed_in:    require(listed_in)?,
      duration:     require(duration)?,
    })
  }
}

// ─── Raw rows ────────────────────────────────────────────────────────────────

/// Open `path` and read every row.
pub fn load_path(path: &Path, encoding: Encoding) -> Result<Vec<RawTitle>> {
  let file = File::open(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;
  load_reader(file, encoding)
}

/// Read every row from `reader`. The first record is the header row.
pub fn load_reader<R: io::Read>(reader: R, encoding: Encoding) -> Result<Vec<RawTitle>> {
  let mut reader = csv::ReaderBuilder::new()
    .has_headers(true)
    .from_reader(reader);

  let names = reader
    .byte_headers()?
    .iter()
    .enumerate()
    .map(|(i, bytes)| {
      encoding
        .decode(bytes)
        .map(|s| s.trim_start_matches('\u{feff}').trim().to_string())
        .ok_or_else(|| Error::Encoding {
          line: 1,
          column: format!("#{i}"),
          encoding,
        })
    })
    .collect::<Result<Vec<_>>>()?;
  let columns = Columns::locate(&names)?;

  let mut rows = Vec::new();
  for record in reader.byte_records() {
    let record = record?;
    let line = record.position().map_or(0, |p| p.line());

    let cell = |idx: usize| -> Result<Option<String>> {
      let bytes = record.get(idx).unwrap_or_default();
      if bytes.is_empty() {
        return Ok(None);
      }
      encoding
        .decode(bytes)
        .map(|s| Some(s.into_owned()))
        .ok_or_else(|| Error::Encoding {
          line,
          column: names[idx].clone(),
          encoding,
        })
    };
    let optional = |idx: Option<usize>| idx.map(&cell).transpose().map(Option::flatten);

    rows.push(RawTitle {
      show_id:      optional(columns.show_id)?,
      title:        optional(columns.title)?,
      kind:         cell(columns.kind)?,
      release_year: cell(columns.release_year)?,
      date_added:   cell(columns.date_added)?,
      country:      cell(columns.country)?,
      listed_in:    cell(columns.listed_in)?,
      duration:     cell(columns.duration)?,
    });
  }

  Ok(rows)
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// Load `path`, derive every row, and log a summary of what was read.
pub fn load_catalog(path: &Path, encoding: Encoding) -> Result<Catalog> {
  let raw = load_path(path, encoding)?;
  let catalog = derive_logged(raw);

  let years = catalog.release_years();
  tracing::info!(
    path = %path.display(),
    %encoding,
    rows = catalog.len(),
    kinds = ?catalog.kinds(),
    first_year = years.first().copied(),
    last_year = years.last().copied(),
    "catalog loaded"
  );
  Ok(catalog)
}

/// Derive rows, noting cells that were present but could not be parsed.
fn derive_logged(raw: Vec<RawTitle>) -> Catalog {
  let mut bad_dates = 0usize;
  let mut bad_years = 0usize;

  let titles: Vec<Title> = raw
    .into_iter()
    .enumerate()
    .map(|(row, raw)| {
      let had_date = raw.date_added.is_some();
      let had_year = raw.release_year.is_some();
      let title = derive::title(raw);
      if had_date && title.date_added.is_none() {
        bad_dates += 1;
        tracing::debug!(row, show_id = ?title.show_id, "unparseable date_added");
      }
      if had_year && title.release_year.is_none() {
        bad_years += 1;
        tracing::debug!(row, show_id = ?title.show_id, "unparseable release_year");
      }
      title
    })
    .collect();

  if bad_dates > 0 || bad_years > 0 {
    tracing::warn!(bad_dates, bad_years, "some cells could not be parsed and were left empty");
  }
  Catalog::from_titles(titles)
}
