pub mod report;

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::dashboard::Dashboard;
use crate::filter::{DocumentCriteria, PageCriteria};
use crate::render::{BadgeStyle, Cell, Row, DOCUMENT_COLUMNS, PAGE_COLUMNS};
use crate::summary::{self, Summary};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        return Some(OutputFormat::Html);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

#[derive(Clone, Debug, Serialize)]
pub struct SummaryCard {
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SectionReport<'a, C: Serialize> {
    pub criteria: &'a C,
    pub columns: &'static [&'static str],
    pub rows: &'a [Row],
}

/// Everything the dashboard currently displays, borrowed for serialization.
#[derive(Clone, Debug, Serialize)]
pub struct Report<'a> {
    pub summary: Option<&'a Summary>,
    pub cards: Vec<SummaryCard>,
    pub banners: &'a [String],
    pub library_options: &'a [String],
    pub pages: Option<SectionReport<'a, PageCriteria>>,
    pub documents: Option<SectionReport<'a, DocumentCriteria>>,
}

pub fn build_report(dashboard: &Dashboard) -> Report<'_> {
    let host = dashboard.host();
    let cards = summary::FIELD_IDS
        .iter()
        .copied()
        .filter_map(|id| {
            host.text(id).map(|value| SummaryCard {
                id,
                label: summary::label_for(id),
                value: value.to_string(),
            })
        })
        .collect();

    Report {
        summary: dashboard.summary(),
        cards,
        banners: host.banners(),
        library_options: host.library_selector(),
        pages: dashboard.pages().map(|section| SectionReport {
            criteria: section.criteria(),
            columns: &PAGE_COLUMNS,
            rows: section.body().rows(),
        }),
        documents: dashboard.documents().map(|section| SectionReport {
            criteria: section.criteria(),
            columns: &DOCUMENT_COLUMNS,
            rows: section.body().rows(),
        }),
    }
}

pub fn describe_page_criteria(criteria: &PageCriteria) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    if let Some(search) = criteria.search.as_deref().map(str::trim) {
        if !search.is_empty() {
            parts.push(format!("search={search}"));
        }
    }
    if let Some(status) = criteria.status.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("status={status}"));
    }
    if let Some(min) = criteria.min_accessibility.filter(|m| *m > 0) {
        parts.push(format!("min_accessibility={min}"));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

pub fn describe_document_criteria(criteria: &DocumentCriteria) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    if let Some(library) = criteria.library.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("library={library}"));
    }
    if let Some(sensitivity) = criteria.sensitivity.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("sensitivity={sensitivity}"));
    }
    if let Some(teams) = criteria.teams {
        parts.push(format!("teams={teams}"));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Plain text when `color` is off, whatever `colored` decided for the terminal.
fn paint(color: bool, styled: ColoredString) -> String {
    if color {
        styled.to_string()
    } else {
        styled.clear().to_string()
    }
}

fn paint_cell(cell: &Cell, padded: String, color: bool) -> String {
    let styled = match cell {
        Cell::Badge { style, .. } => match style {
            BadgeStyle::Danger => padded.red().bold(),
            BadgeStyle::Warning => padded.yellow().bold(),
            BadgeStyle::Success => padded.green().bold(),
            BadgeStyle::Neutral => padded.dimmed(),
        },
        Cell::YesNo { value: true } => padded.green(),
        Cell::YesNo { value: false } => padded.dimmed(),
        Cell::Integer { .. } => padded.cyan(),
        _ => return padded,
    };
    paint(color, styled)
}

fn render_text_table(out: &mut String, columns: &[&str], rows: &[Row], color: bool) {
    if let [row] = rows {
        if row.is_placeholder() {
            let message = paint(color, row.cells[0].display_text().dimmed());
            out.push_str(&format!("  {message}\n"));
            return;
        }
    }

    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.cells.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.display_text().chars().count());
            }
        }
    }

    let header: Vec<String> = columns
        .iter()
        .zip(widths.iter())
        .map(|(c, &w)| paint(color, format!("{c:<w$}").bold()))
        .collect();
    out.push_str(&format!("  {}\n", header.join("  ")));

    for row in rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, &w)| paint_cell(cell, format!("{:<w$}", cell.display_text()), color))
            .collect();
        out.push_str(&format!("  {}\n", cells.join("  ").trim_end()));
    }
}

fn section_heading(title: &str, filters: Option<String>, color: bool) -> String {
    let title = paint(color, title.bold().white());
    match filters {
        Some(f) => format!("{title} {}\n", paint(color, format!("({f})").cyan())),
        None => format!("{title}\n"),
    }
}

/// Renders the terminal report. Pass `color = false` for anything that is not
/// a terminal, such as an output file.
pub fn render_text(report: &Report<'_>, color: bool) -> Vec<u8> {
    let mut out = String::new();

    for banner in report.banners {
        out.push_str(&format!(
            "{} {}\n",
            paint(color, "[ERR]".bold().red()),
            paint(color, banner.bold())
        ));
    }

    if !report.cards.is_empty() {
        out.push_str(&section_heading(":: Summary", None, color));
        for card in &report.cards {
            out.push_str(&format!(
                "  {:<20}: {}\n",
                card.label,
                paint(color, card.value.bold().cyan())
            ));
        }
        out.push('\n');
    }

    if let Some(pages) = report.pages.as_ref() {
        out.push_str(&section_heading(
            ":: Pages",
            describe_page_criteria(pages.criteria),
            color,
        ));
        render_text_table(&mut out, pages.columns, pages.rows, color);
        out.push('\n');
    }

    if let Some(documents) = report.documents.as_ref() {
        out.push_str(&section_heading(
            ":: Documents",
            describe_document_criteria(documents.criteria),
            color,
        ));
        if !report.library_options.is_empty() {
            out.push_str(&format!(
                "  {} {}\n",
                paint(color, "libraries:".dimmed()),
                report.library_options.join(", ")
            ));
        }
        render_text_table(&mut out, documents.columns, documents.rows, color);
    }

    out.into_bytes()
}

pub fn render_json(report: &Report<'_>) -> Vec<u8> {
    let mut out = serde_json::to_vec_pretty(report).unwrap_or_else(|_| b"{}".to_vec());
    out.push(b'\n');
    out
}

pub fn render_html(report: &Report<'_>) -> Vec<u8> {
    report::render_html(report)
}

pub fn render(report: &Report<'_>, format: OutputFormat, color: bool) -> Vec<u8> {
    match format {
        OutputFormat::Text => render_text(report, color),
        OutputFormat::Json => render_json(report),
        OutputFormat::Html => render_html(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Collections, Document, Page};

    fn dashboard() -> Dashboard {
        let pages = vec![Page {
            title: "Home".to_string(),
            url: "/home".to_string(),
            owner: "Web".to_string(),
            status: "Published".to_string(),
            last_reviewed: "2024-01-01".to_string(),
            accessibility_score: 90,
            issues_count: 0,
            priority: Some("High".to_string()),
        }];
        let documents = vec![Document {
            name: "Plan.docx".to_string(),
            library: "Projects".to_string(),
            owner: "PMO".to_string(),
            last_modified: "2024-02-02".to_string(),
            sensitivity: "Internal".to_string(),
            retention_label: "3 years".to_string(),
            synced_to_teams: true,
        }];
        Dashboard::setup(&Collections::new(pages, documents))
    }

    #[test]
    fn format_parsing_and_inference() {
        assert_eq!(OutputFormat::parse(" HTML "), Some(OutputFormat::Html));
        assert_eq!(OutputFormat::parse("txt"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::parse("xml"), None);
        assert_eq!(infer_format_from_path("out/dash.JSON"), Some(OutputFormat::Json));
        assert_eq!(infer_format_from_path("dash.htm"), Some(OutputFormat::Html));
        assert_eq!(infer_format_from_path("dash"), None);
    }

    #[test]
    fn report_lists_cards_in_display_order() {
        let dashboard = dashboard();
        let report = build_report(&dashboard);
        let ids: Vec<&str> = report.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, summary::FIELD_IDS.to_vec());
        assert_eq!(report.cards[2].value, "90 / 100");
    }

    #[test]
    fn json_report_carries_rows_and_criteria() {
        let mut dashboard = dashboard();
        dashboard.pages_mut().unwrap().set_status("Draft");
        let report = build_report(&dashboard);
        let value: serde_json::Value = serde_json::from_slice(&render_json(&report)).unwrap();
        assert_eq!(value["pages"]["criteria"]["status"], "Draft");
        assert_eq!(value["pages"]["rows"][0]["cells"][0]["kind"], "placeholder");
        assert_eq!(value["documents"]["rows"][0]["cells"][6]["kind"], "yes_no");
        assert_eq!(value["summary"]["sensitive_documents"], 1);
        assert_eq!(value["library_options"][0], "Projects");
    }

    #[test]
    fn text_report_mentions_filters_and_placeholder() {
        let mut dashboard = dashboard();
        dashboard.documents_mut().unwrap().set_teams(Some(false));
        let text = String::from_utf8(render_text(&build_report(&dashboard), false)).unwrap();
        assert!(text.contains(":: Documents (teams=false)"));
        assert!(text.contains("No documents match the selected filters."));
        assert!(text.contains("Avg accessibility"));
        assert!(text.contains("Home (/home)"));
    }

    #[test]
    fn uncolored_text_has_no_escapes_even_on_a_terminal() {
        colored::control::set_override(true);
        let dash = dashboard();
        let report = build_report(&dash);
        let plain = String::from_utf8(render(&report, OutputFormat::Text, false)).unwrap();
        let painted = String::from_utf8(render(&report, OutputFormat::Text, true)).unwrap();
        colored::control::unset_override();

        assert!(!plain.contains('\u{1b}'));
        assert!(plain.contains("High"));
        assert!(painted.contains('\u{1b}'));
    }

    #[test]
    fn criteria_descriptions_skip_empty_values() {
        assert_eq!(describe_page_criteria(&PageCriteria::default()), None);
        let criteria = PageCriteria {
            search: Some(" faq ".to_string()),
            status: Some(String::new()),
            min_accessibility: Some(0),
        };
        assert_eq!(describe_page_criteria(&criteria).as_deref(), Some("search=faq"));
    }
}
