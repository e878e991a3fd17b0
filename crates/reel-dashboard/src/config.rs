//! Runtime configuration.
//!
//! Layered, lowest precedence first: built-in defaults, the optional TOML
//! file, `REEL_*` environment variables, then command-line overrides.

use std::path::{Path, PathBuf};

use reel_csv::Encoding;
use serde::Deserialize;

/// Runtime dashboard configuration, deserialised from `reel.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
  #[serde(default = "default_host")]
  pub host:      String,
  #[serde(default = "default_port")]
  pub port:      u16,
  /// Location of the delimited titles file.
  pub data_path: PathBuf,
  #[serde(default)]
  pub encoding:  Encoding,
  /// Page heading and browser tab title.
  #[serde(default = "default_title")]
  pub title:     String,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  8050
}

fn default_title() -> String {
  "Netflix Dashboard".to_string()
}

impl DashboardConfig {
  /// Build the layered configuration. A missing `file` is not an error.
  pub fn load(
    file: &Path,
    data_override: Option<&Path>,
  ) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(file.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("REEL"))
      .set_override_option(
        "data_path",
        data_override.map(|p| p.to_string_lossy().into_owned()),
      )?
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_fill_everything_but_the_data_path() {
    let cfg = DashboardConfig::load(
      Path::new("/nonexistent/reel.toml"),
      Some(Path::new("/srv/titles.csv")),
    )
    .unwrap();
    assert_eq!(cfg.data_path, PathBuf::from("/srv/titles.csv"));
    assert_eq!(cfg.address(), "127.0.0.1:8050");
    assert_eq!(cfg.encoding, Encoding::Latin1);
    assert_eq!(cfg.title, "Netflix Dashboard");
  }

  #[test]
  fn data_path_is_required() {
    let result = DashboardConfig::load(Path::new("/nonexistent/reel.toml"), None);
    assert!(result.is_err());
  }

  #[test]
  fn file_values_and_cli_override() {
    let path = std::env::temp_dir().join(format!("reel-config-{}.toml", std::process::id()));
    std::fs::write(
      &path,
      "port = 9000\nencoding = \"utf-8\"\ndata_path = \"from-file.csv\"\ntitle = \"Catalogue\"\n",
    )
    .unwrap();

    let from_file = DashboardConfig::load(&path, None).unwrap();
    let overridden = DashboardConfig::load(&path, Some(Path::new("cli.csv"))).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(from_file.port, 9000);
    assert_eq!(from_file.encoding, Encoding::Utf8);
    assert_eq!(from_file.data_path, PathBuf::from("from-file.csv"));
    assert_eq!(from_file.title, "Catalogue");
    assert_eq!(overridden.data_path, PathBuf::from("cli.csv"));
  }
}
