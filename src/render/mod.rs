pub mod host;
pub mod sections;

use serde::Serialize;

use crate::model::{Document, Page, Priority};

pub use host::HostDocument;
pub use sections::{DocumentsSection, PagesSection};

pub const COLUMN_COUNT: usize = 7;
pub const NO_PAGES_MESSAGE: &str = "No pages match the selected filters.";
pub const NO_DOCUMENTS_MESSAGE: &str = "No documents match the selected filters.";

pub const PAGE_COLUMNS: [&str; COLUMN_COUNT] = [
    "Page",
    "Owner",
    "Status",
    "Last reviewed",
    "Accessibility",
    "Issues",
    "Priority",
];

pub const DOCUMENT_COLUMNS: [&str; COLUMN_COUNT] = [
    "Name",
    "Library",
    "Owner",
    "Last modified",
    "Sensitivity",
    "Retention",
    "Teams",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    Danger,
    Warning,
    Success,
    Neutral,
}

impl BadgeStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Neutral => "neutral",
        }
    }

    pub fn css_class(self) -> String {
        format!("badge badge-{}", self.as_str())
    }
}

/// A typed table cell. Rows never carry markup; escaping belongs to whichever
/// output format finally displays them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Text { value: String },
    Integer { value: i64 },
    TitleWithUrl { title: String, url: String },
    Badge { label: String, style: BadgeStyle },
    YesNo { value: bool },
    Placeholder { message: String, colspan: usize },
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    pub fn display_text(&self) -> String {
        match self {
            Self::Text { value } => value.clone(),
            Self::Integer { value } => value.to_string(),
            Self::TitleWithUrl { title, url } => format!("{title} ({url})"),
            Self::Badge { label, .. } => label.clone(),
            Self::YesNo { value: true } => "Yes".to_string(),
            Self::YesNo { value: false } => "No".to_string(),
            Self::Placeholder { message, .. } => message.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn placeholder(message: &str) -> Self {
        Self::new(vec![Cell::Placeholder {
            message: message.to_string(),
            colspan: COLUMN_COUNT,
        }])
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.cells.as_slice(), [Cell::Placeholder { .. }])
    }
}

/// Anything rows can be rendered into.
pub trait RenderTarget {
    fn replace_children(&mut self, rows: Vec<Row>);
    fn append_child(&mut self, row: Row);
}

/// In-memory table body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TableBody {
    rows: Vec<Row>,
}

impl TableBody {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.rows.as_slice(), [row] if row.is_placeholder())
    }
}

impl RenderTarget for TableBody {
    fn replace_children(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }

    fn append_child(&mut self, row: Row) {
        self.rows.push(row);
    }
}

pub fn priority_badge(priority: Priority) -> Cell {
    let style = match priority {
        Priority::High => BadgeStyle::Danger,
        Priority::Medium => BadgeStyle::Warning,
        Priority::Low => BadgeStyle::Success,
        Priority::Unknown => BadgeStyle::Neutral,
    };
    Cell::Badge {
        label: priority.label().to_string(),
        style,
    }
}

pub fn page_row(page: &Page) -> Row {
    Row::new(vec![
        Cell::TitleWithUrl {
            title: page.title.clone(),
            url: page.url.clone(),
        },
        Cell::text(&page.owner),
        Cell::text(&page.status),
        Cell::text(&page.last_reviewed),
        Cell::Integer {
            value: page.accessibility_score,
        },
        Cell::Integer {
            value: i64::try_from(page.issues_count).unwrap_or(i64::MAX),
        },
        priority_badge(page.priority()),
    ])
}

pub fn document_row(document: &Document) -> Row {
    Row::new(vec![
        Cell::text(&document.name),
        Cell::text(&document.library),
        Cell::text(&document.owner),
        Cell::text(&document.last_modified),
        Cell::text(&document.sensitivity),
        Cell::text(&document.retention_label),
        Cell::YesNo {
            value: document.synced_to_teams,
        },
    ])
}

fn render_rows<T, I>(target: &mut T, rows: I, empty_message: &str)
where
    T: RenderTarget + ?Sized,
    I: IntoIterator<Item = Row>,
{
    target.replace_children(Vec::new());
    let mut rendered = 0usize;
    for row in rows {
        target.append_child(row);
        rendered += 1;
    }
    if rendered == 0 {
        target.append_child(Row::placeholder(empty_message));
    }
}

/// Replaces the target's rows with one row per page, or the placeholder row.
pub fn render_pages<T: RenderTarget + ?Sized>(pages: &[&Page], target: &mut T) {
    render_rows(target, pages.iter().map(|p| page_row(p)), NO_PAGES_MESSAGE);
}

pub fn render_documents<T: RenderTarget + ?Sized>(documents: &[&Document], target: &mut T) {
    render_rows(
        target,
        documents.iter().map(|d| document_row(d)),
        NO_DOCUMENTS_MESSAGE,
    );
}
