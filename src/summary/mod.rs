use serde::Serialize;

use crate::model::{Document, Page};

pub const TOTAL_PAGES_ID: &str = "total-pages";
pub const PAGES_WITH_ISSUES_ID: &str = "pages-with-issues";
pub const AVG_ACCESSIBILITY_ID: &str = "avg-accessibility";
pub const TOTAL_DOCS_ID: &str = "total-docs";
pub const SENSITIVE_DOCS_ID: &str = "sensitive-docs";

pub const FIELD_IDS: [&str; 5] = [
    TOTAL_PAGES_ID,
    PAGES_WITH_ISSUES_ID,
    AVG_ACCESSIBILITY_ID,
    TOTAL_DOCS_ID,
    SENSITIVE_DOCS_ID,
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_pages: usize,
    pub pages_with_issues: usize,
    pub average_accessibility: i64,
    pub total_documents: usize,
    pub sensitive_documents: usize,
}

impl Summary {
    /// Always computed over the unfiltered collections.
    pub fn compute(pages: &[Page], documents: &[Document]) -> Self {
        Self {
            total_pages: pages.len(),
            pages_with_issues: pages.iter().filter(|p| p.issues_count > 0).count(),
            average_accessibility: average_accessibility(pages),
            total_documents: documents.len(),
            sensitive_documents: documents.iter().filter(|d| d.is_sensitive()).count(),
        }
    }

    /// Element id and display text for each summary card, in page order.
    pub fn fields(&self) -> [(&'static str, String); 5] {
        [
            (TOTAL_PAGES_ID, self.total_pages.to_string()),
            (PAGES_WITH_ISSUES_ID, self.pages_with_issues.to_string()),
            (
                AVG_ACCESSIBILITY_ID,
                format!("{} / 100", self.average_accessibility),
            ),
            (TOTAL_DOCS_ID, self.total_documents.to_string()),
            (SENSITIVE_DOCS_ID, self.sensitive_documents.to_string()),
        ]
    }
}

/// Card heading for a summary element id.
pub fn label_for(id: &str) -> &'static str {
    match id {
        TOTAL_PAGES_ID => "Total pages",
        PAGES_WITH_ISSUES_ID => "Pages with issues",
        AVG_ACCESSIBILITY_ID => "Avg accessibility",
        TOTAL_DOCS_ID => "Total documents",
        SENSITIVE_DOCS_ID => "Sensitive documents",
        _ => "",
    }
}

pub fn average_accessibility(pages: &[Page]) -> i64 {
    if pages.is_empty() {
        return 0;
    }
    let sum: i64 = pages.iter().map(|p| p.accessibility_score).sum();
    (sum as f64 / pages.len() as f64).round() as i64
}
