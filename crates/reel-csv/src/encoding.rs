//! Text encodings accepted for the source file.

use std::{borrow::Cow, fmt};

use serde::Deserialize;

/// How cell bytes are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
  /// ISO-8859-1. Every byte maps to the code point of the same value, so
  /// decoding cannot fail.
  #[default]
  #[serde(alias = "latin-1", alias = "iso-8859-1")]
  Latin1,
  #[serde(alias = "utf-8")]
  Utf8,
}

impl Encoding {
  /// Decode one cell. `None` means the bytes are not valid in this encoding.
  pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
    match self {
      Encoding::Utf8 => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
      Encoding::Latin1 if bytes.is_ascii() => {
        std::str::from_utf8(bytes).ok().map(Cow::Borrowed)
      }
      Encoding::Latin1 => Some(Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())),
    }
  }
}

impl fmt::Display for Encoding {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Encoding::Latin1 => "latin-1",
      Encoding::Utf8 => "utf-8",
    })
  }
}
