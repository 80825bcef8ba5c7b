use super::{describe_document_criteria, describe_page_criteria, Report};
use crate::render::{Cell, Row};

pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn render_cell(cell: &Cell) -> String {
    match cell {
        Cell::Text { value } => format!("<td>{}</td>", escape_html(value)),
        Cell::Integer { value } => format!("<td class=\"num\">{value}</td>"),
        Cell::TitleWithUrl { title, url } => format!(
            "<td><strong>{}</strong><br/><span class=\"url\">{}</span></td>",
            escape_html(title),
            escape_html(url)
        ),
        Cell::Badge { label, style } => format!(
            "<td><span class=\"{}\">{}</span></td>",
            style.css_class(),
            escape_html(label)
        ),
        Cell::YesNo { value } => format!("<td>{}</td>", if *value { "Yes" } else { "No" }),
        Cell::Placeholder { message, colspan } => format!(
            "<td colspan=\"{colspan}\" class=\"empty\">{}</td>",
            escape_html(message)
        ),
    }
}

fn render_rows(rows: &[Row]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str("          <tr>");
        for cell in &row.cells {
            out.push_str(&render_cell(cell));
        }
        out.push_str("</tr>\n");
    }
    out
}

fn render_table(id: &str, columns: &[&str], rows: &[Row]) -> String {
    let head: String = columns
        .iter()
        .map(|c| format!("<th>{}</th>", escape_html(c)))
        .collect();
    format!(
        "      <table id=\"{id}\">\n        <thead><tr>{head}</tr></thead>\n        <tbody>\n{}        </tbody>\n      </table>\n",
        render_rows(rows)
    )
}

fn render_filters(filters: Option<String>) -> String {
    match filters {
        Some(f) => format!(
            "      <p class=\"filters\">Filters: {}</p>\n",
            escape_html(&f)
        ),
        None => "      <p class=\"filters\">Filters: none</p>\n".to_string(),
    }
}

pub fn render_html(report: &Report<'_>) -> Vec<u8> {
    let mut header = String::new();
    for banner in report.banners {
        header.push_str(&format!(
            "    <div class=\"error-banner\">{}</div>\n",
            escape_html(banner)
        ));
    }

    let mut cards = String::new();
    for card in &report.cards {
        cards.push_str(&format!(
            "      <div class=\"card\"><div class=\"card-label\">{}</div><div class=\"card-value\" id=\"{}\">{}</div></div>\n",
            escape_html(card.label),
            card.id,
            escape_html(&card.value)
        ));
    }

    let mut sections = String::new();
    if let Some(pages) = report.pages.as_ref() {
        sections.push_str("    <section>\n      <h2>Pages</h2>\n");
        sections.push_str(&render_filters(describe_page_criteria(pages.criteria)));
        sections.push_str(&render_table("pagesTable", pages.columns, pages.rows));
        sections.push_str("    </section>\n");
    }
    if let Some(documents) = report.documents.as_ref() {
        sections.push_str("    <section>\n      <h2>Documents</h2>\n");
        sections.push_str(&render_filters(describe_document_criteria(
            documents.criteria,
        )));
        if !report.library_options.is_empty() {
            let libraries: Vec<String> = report
                .library_options
                .iter()
                .map(|l| escape_html(l))
                .collect();
            sections.push_str(&format!(
                "      <p class=\"filters\">Libraries: {}</p>\n",
                libraries.join(", ")
            ));
        }
        sections.push_str(&render_table("docsTable", documents.columns, documents.rows));
        sections.push_str("    </section>\n");
    }

    let summary = if cards.is_empty() {
        String::new()
    } else {
        format!("    <section class=\"cards\">\n{cards}    </section>\n")
    };

    let html = format!(
        r####"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta content="width=device-width, initial-scale=1.0" name="viewport"/>
  <title>Content Dashboard</title>
  <style>
    body {{ font-family: "Segoe UI", Inter, sans-serif; margin: 0; background: #f5f6fa; color: #1f2430; }}
    .site-header {{ background: #ffffff; border-bottom: 1px solid #e1e4ec; padding: 1rem 2rem; }}
    .site-header h1 {{ margin: 0; font-size: 1.4rem; }}
    .error-banner {{ background: #fdecea; color: #611a15; padding: 0.75rem 1rem; margin-top: 0.5rem; border-radius: 6px; }}
    main {{ max-width: 1200px; margin: 0 auto; padding: 1.5rem 2rem; }}
    .cards {{ display: flex; flex-wrap: wrap; gap: 1rem; margin-bottom: 2rem; }}
    .card {{ background: #ffffff; border: 1px solid #e1e4ec; border-radius: 8px; padding: 1rem 1.25rem; min-width: 170px; }}
    .card-label {{ color: #5b6170; font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.04em; }}
    .card-value {{ font-size: 1.6rem; font-weight: 700; margin-top: 0.25rem; }}
    section {{ margin-bottom: 2rem; }}
    .filters {{ color: #5b6170; font-size: 0.85rem; }}
    table {{ width: 100%; border-collapse: collapse; background: #ffffff; border: 1px solid #e1e4ec; }}
    th, td {{ text-align: left; padding: 0.6rem 0.75rem; border-bottom: 1px solid #eef0f5; font-size: 0.9rem; }}
    th {{ background: #f0f2f7; font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.05em; }}
    td.num {{ font-variant-numeric: tabular-nums; }}
    td.empty {{ text-align: center; color: #5b6170; font-style: italic; }}
    .url {{ color: #5b6170; font-size: 0.8rem; }}
    .badge {{ display: inline-block; padding: 0.15rem 0.55rem; border-radius: 999px; font-size: 0.75rem; font-weight: 600; }}
    .badge-danger {{ background: #fdecea; color: #b42318; }}
    .badge-warning {{ background: #fff4e5; color: #b54708; }}
    .badge-success {{ background: #e8f5e9; color: #1b7f3b; }}
    .badge-neutral {{ background: #eef0f5; color: #5b6170; }}
  </style>
</head>
<body>
  <header class="site-header">
    <h1>Content Dashboard</h1>
{header}  </header>
  <main>
{summary}{sections}  </main>
</body>
</html>
"####
    );

    html.into_bytes()
}
