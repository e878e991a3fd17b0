//! Handler for `GET /`: the dashboard page.
//!
//! The page holds the two dropdowns and one panel per [`Chart`]. Its script
//! re-fetches a panel only when a control that panel is wired to changes.
//! The wiring table is generated from [`Chart::inputs`].

use axum::{extract::State, response::Html};
use reel_core::{Chart, Inputs};
use serde::Serialize;

use crate::{AppState, handlers::controls::Controls};

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{title}}</title>
  <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
  <style>
    body { font-family: sans-serif; margin: 0 auto; max-width: 1200px; }
    h2 { text-align: center; }
    .filters { display: flex; gap: 4%; padding: 10px; }
    .filters select { width: 48%; padding: 4px; }
    .chart { min-height: 450px; }
  </style>
</head>
<body>
  <h2>{{title}}</h2>
  <div class="filters">
    <select id="year_filter">
      <option value="">Filter by Year</option>
{{year_options}}
    </select>
    <select id="type_filter">
      <option value="">Filter by Type</option>
{{type_options}}
    </select>
  </div>
{{panels}}
  <script>
    const PANELS = {{wiring}};
    const year = document.getElementById('year_filter');
    const kind = document.getElementById('type_filter');

    async function refresh(slug) {
      const params = new URLSearchParams();
      if (year.value) params.set('year', year.value);
      if (kind.value) params.set('type', kind.value);
      const resp = await fetch(`/api/charts/${slug}?${params}`);
      const body = await resp.json();
      if (!resp.ok) {
        console.error(slug, body.error);
        return;
      }
      Plotly.react(slug, body.data, body.layout);
    }

    function wire(control, input) {
      control.addEventListener('change', () => {
        PANELS.filter(p => p[input]).forEach(p => refresh(p.slug));
      });
    }

    wire(year, 'year');
    wire(kind, 'type');
    PANELS.forEach(p => refresh(p.slug));
  </script>
</body>
</html>
"#;

#[derive(Serialize)]
struct Panel {
  slug:   &'static str,
  #[serde(flatten)]
  inputs: Inputs,
}

/// `GET /`
pub async fn handler(State(state): State<AppState>) -> Html<String> {
  Html(render(&state.config.title, &state.controls))
}

pub fn render(title: &str, controls: &Controls) -> String {
  let year_options = options(controls.years.iter().map(ToString::to_string));
  let type_options = options(controls.types.iter().cloned());

  let panels = Chart::ALL
    .iter()
    .map(|c| format!("  <div id=\"{}\" class=\"chart\"></div>", c.slug()))
    .collect::<Vec<_>>()
    .join("\n");

  let wiring: Vec<Panel> = Chart::ALL
    .iter()
    .map(|c| Panel { slug: c.slug(), inputs: c.inputs() })
    .collect();
  let wiring = serde_json::to_string(&wiring)
    .unwrap_or_else(|_| "[]".to_string())
    .replace("</", "<\\/");

  let title = escape(title);
  fill(TEMPLATE, |slot| match slot {
    "title" => Some(title.as_str()),
    "year_options" => Some(year_options.as_str()),
    "type_options" => Some(type_options.as_str()),
    "panels" => Some(panels.as_str()),
    "wiring" => Some(wiring.as_str()),
    _ => None,
  })
}

/// Substitute every `{{slot}}` in `template` in a single left-to-right pass.
/// Substituted text is never rescanned. Unknown slots are kept verbatim.
fn fill<'a>(template: &str, value: impl Fn(&str) -> Option<&'a str>) -> String {
  let mut out = String::with_capacity(template.len());
  let mut rest = template;
  while let Some(start) = rest.find("{{") {
    let Some(len) = rest[start + 2..].find("}}") else {
      break;
    };
    let slot = &rest[start + 2..start + 2 + len];
    out.push_str(&rest[..start]);
    match value(slot) {
      Some(text) => out.push_str(text),
      None => out.push_str(&rest[start..start + len + 4]),
    }
    rest = &rest[start + len + 4..];
  }
  out.push_str(rest);
  out
}

fn options(values: impl Iterator<Item = String>) -> String {
  values
    .map(|v| {
      let v = escape(&v);
      format!("      <option value=\"{v}\">{v}</option>")
    })
    .collect::<Vec<_>>()
    .join("\n")
}

fn escape(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(c),
    }
  }
  out
}
