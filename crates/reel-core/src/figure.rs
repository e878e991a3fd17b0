//! Declarative chart descriptions.
//!
//! A [`Figure`] serialises to the `{ "data": [...], "layout": {...} }` shape
//! that Plotly accepts, so the browser can render it without any further
//! transformation.

use serde::Serialize;

/// Text shown in place of an empty chart.
pub const NO_DATA: &str = "No data for this selection";

// ─── Figure ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
  pub data:   Vec<Trace>,
  pub layout: Layout,
}

impl Figure {
  pub fn new(title: impl Into<String>, data: Vec<Trace>) -> Self {
    Self {
      data,
      layout: Layout {
        title:       title.into(),
        xaxis:       None,
        yaxis:       None,
        annotations: Vec::new(),
      },
    }
  }

  pub fn with_axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
    self.layout.xaxis = Some(Axis { title: x.into() });
    self.layout.yaxis = Some(Axis { title: y.into() });
    self
  }

  /// Attach the "no data" annotation when no trace has any point.
  pub fn or_placeholder(mut self) -> Self {
    if self.points() == 0 {
      self.layout.annotations.push(Annotation::centered(NO_DATA));
    }
    self
  }

  /// Total number of plotted points across every trace.
  pub fn points(&self) -> usize {
    self.data.iter().map(Trace::len).sum()
  }

  pub fn is_placeholder(&self) -> bool {
    self.layout.annotations.iter().any(|a| a.text == NO_DATA)
  }
}

// ─── Traces ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  Lines,
  Markers,
}

/// One series. The serde tag is Plotly's trace `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
  Bar {
    x: Vec<String>,
    y: Vec<u64>,
  },
  /// A line over categorical x values.
  #[serde(rename = "scatter")]
  Line {
    mode: Mode,
    x:    Vec<String>,
    y:    Vec<u64>,
  },
  /// A named group of markers with optional hover text.
  #[serde(rename = "scatter")]
  Markers {
    mode: Mode,
    name: String,
    x:    Vec<i32>,
    y:    Vec<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    text: Vec<String>,
  },
  Pie {
    labels: Vec<String>,
    values: Vec<u64>,
  },
  Choropleth {
    locations:    Vec<String>,
    z:            Vec<u64>,
    locationmode: String,
    colorscale:   String,
  },
}

impl Trace {
  pub fn len(&self) -> usize {
    match self {
      Trace::Bar { x, .. } | Trace::Line { x, .. } => x.len(),
      Trace::Markers { x, .. } => x.len(),
      Trace::Pie { labels, .. } => labels.len(),
      Trace::Choropleth { locations, .. } => locations.len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

// ─── Layout ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
  pub title:       String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub xaxis:       Option<Axis>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub yaxis:       Option<Axis>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Axis {
  pub title: String,
}

/// A free-floating label positioned in paper coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
  pub text:      String,
  pub showarrow: bool,
  pub xref:      &'static str,
  pub yref:      &'static str,
  pub x:         f64,
  pub y:         f64,
}

impl Annotation {
  pub fn centered(text: impl Into<String>) -> Self {
    Self {
      text:      text.into(),
      showarrow: false,
      xref:      "paper",
      yref:      "paper",
      x:         0.5,
      y:         0.5,
    }
  }
}
