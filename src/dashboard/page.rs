//! Page composition: a title header followed by one full-width row per chart.

use anyhow::Result;
use common::ChartSpec;
use serde::Serialize;
use serde_json::Value;

use super::figure::plotly_figure;

/// Title shown at the top of the dashboard
pub const PAGE_TITLE: &str = "Dashboard de Confianza Ciudadana - FCC";

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// One stacked row of the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    /// Centered title text
    Header { text: String },
    /// A chart rendered from its Plotly figure
    Chart {
        id: String,
        title: String,
        figure: Value,
    },
}

/// The composed dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub title: String,
    pub sections: Vec<Section>,
}

/// Stacks the header and the charts, in the given order.
pub fn compose_page(title: &str, charts: &[ChartSpec]) -> Result<Page> {
    let mut sections = Vec::with_capacity(charts.len() + 1);
    sections.push(Section::Header {
        text: title.to_string(),
    });
    for spec in charts {
        sections.push(Section::Chart {
            id: spec.id.clone(),
            title: spec.title.clone(),
            figure: plotly_figure(spec)?,
        });
    }

    Ok(Page {
        title: title.to_string(),
        sections,
    })
}

impl Page {
    /// Renders the page as a complete HTML document.
    pub fn render_html(&self) -> Result<String> {
        let mut rows = String::new();
        for section in &self.sections {
            rows.push_str(&section_html(section)?);
        }

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link rel="stylesheet" href="{bootstrap}">
<script src="{plotly}"></script>
</head>
<body>
<div class="container-fluid">
{rows}</div>
<script>
document.querySelectorAll('.dash-graph').forEach(function (el) {{
  var figure = JSON.parse(document.getElementById(el.id + '-figure').textContent);
  Plotly.newPlot(el, figure.data, figure.layout, {{responsive: true}});
}});
</script>
</body>
</html>
"#,
            title = escape_html(&self.title),
            bootstrap = BOOTSTRAP_CSS,
            plotly = PLOTLY_JS,
            rows = rows,
        ))
    }
}

fn section_html(section: &Section) -> Result<String> {
    let body = match section {
        Section::Header { text } => {
            format!(r#"<h2 class="text-center mb-4">{}</h2>"#, escape_html(text))
        }
        Section::Chart { id, title, figure } => {
            let id = escape_html(id);
            format!(
                "<div id=\"{id}\" class=\"dash-graph\" role=\"img\" aria-label=\"{label}\" style=\"height: 450px;\"></div>\n\
                 <script type=\"application/json\" id=\"{id}-figure\">{json}</script>",
                id = id,
                label = escape_html(title),
                json = script_safe_json(figure)?,
            )
        }
    };
    Ok(format!(
        "<div class=\"row\">\n<div class=\"col-12\">\n{}\n</div>\n</div>\n",
        body
    ))
}

/// JSON that cannot close the surrounding script element.
fn script_safe_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use compute::dataset::forecast_records;
    use compute::{build_charts, default_builders};

    fn charts() -> Vec<ChartSpec> {
        build_charts(&default_builders(), &forecast_records())
    }

    #[test]
    fn test_page_has_header_then_charts() {
        let page = compose_page(PAGE_TITLE, &charts()).unwrap();

        assert_eq!(page.sections.len(), 4);
        assert_eq!(
            page.sections[0],
            Section::Header {
                text: PAGE_TITLE.to_string()
            }
        );
        let ids: Vec<&str> = page.sections[1..]
            .iter()
            .map(|s| match s {
                Section::Chart { id, .. } => id.as_str(),
                Section::Header { .. } => panic!("unexpected header"),
            })
            .collect();
        assert_eq!(ids, vec!["trust-trend", "mentions-by-month", "response-vs-trust"]);
    }

    #[test]
    fn test_section_count_does_not_depend_on_dataset_size() {
        let empty = build_charts(&default_builders(), &[]);
        assert_eq!(compose_page(PAGE_TITLE, &empty).unwrap().sections.len(), 4);
    }

    #[test]
    fn test_rendered_html_stacks_full_width_rows() {
        let html = compose_page(PAGE_TITLE, &charts()).unwrap().render_html().unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("container-fluid"));
        assert_eq!(html.matches("<div class=\"row\">").count(), 4);
        assert_eq!(html.matches("<div class=\"col-12\">").count(), 4);
        assert!(html.contains("<h2 class=\"text-center mb-4\">Dashboard de Confianza Ciudadana - FCC</h2>"));

        let trend = html.find("id=\"trust-trend\"").unwrap();
        let bars = html.find("id=\"mentions-by-month\"").unwrap();
        let scatter = html.find("id=\"response-vs-trust\"").unwrap();
        assert!(trend < bars && bars < scatter);
    }

    #[test]
    fn test_text_is_escaped() {
        let page = compose_page("<b>Trust & Co</b>", &[]).unwrap();
        let html = page.render_html().unwrap();
        assert!(html.contains("&lt;b&gt;Trust &amp; Co&lt;/b&gt;"));
        assert!(!html.contains("<b>Trust"));
    }

    #[test]
    fn test_embedded_json_cannot_close_script() {
        let mut specs = charts();
        specs[0].title = "</script><script>alert(1)</script>".to_string();
        let html = compose_page(PAGE_TITLE, &specs).unwrap().render_html().unwrap();
        assert!(!html.contains("</script><script>alert(1)"));
    }
}
