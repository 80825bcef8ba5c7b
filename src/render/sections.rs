use std::sync::Arc;

use super::{render_documents, render_pages, RenderTarget, TableBody};
use crate::filter::{self, DocumentCriteria, PageCriteria};
use crate::model::{Document, Page};

/// The pages table plus its three controls. Every control change re-filters
/// the full collection it was set up with.
#[derive(Clone, Debug)]
pub struct PagesSection<T: RenderTarget = TableBody> {
    pages: Arc<[Page]>,
    criteria: PageCriteria,
    body: T,
}

impl<T: RenderTarget> PagesSection<T> {
    /// Renders the whole collection before any control is touched.
    pub fn setup(pages: Arc<[Page]>, body: T) -> Self {
        let mut section = Self {
            pages,
            criteria: PageCriteria::default(),
            body,
        };
        section.apply();
        section
    }

    pub fn set_search(&mut self, search: &str) -> usize {
        self.criteria.search = Some(search.to_string());
        self.apply()
    }

    pub fn set_status(&mut self, status: &str) -> usize {
        self.criteria.status = Some(status.to_string());
        self.apply()
    }

    pub fn set_min_accessibility(&mut self, min: Option<u8>) -> usize {
        self.criteria.min_accessibility = min;
        self.apply()
    }

    pub fn set_criteria(&mut self, criteria: PageCriteria) -> usize {
        self.criteria = criteria;
        self.apply()
    }

    /// Returns the number of matching pages.
    pub fn apply(&mut self) -> usize {
        let filtered = filter::filter_pages(&self.pages, &self.criteria);
        render_pages(&filtered, &mut self.body);
        filtered.len()
    }

    pub fn criteria(&self) -> &PageCriteria {
        &self.criteria
    }

    pub fn body(&self) -> &T {
        &self.body
    }
}

/// The documents table, its library selector values and three controls.
#[derive(Clone, Debug)]
pub struct DocumentsSection<T: RenderTarget = TableBody> {
    documents: Arc<[Document]>,
    libraries: Vec<String>,
    criteria: DocumentCriteria,
    body: T,
}

impl<T: RenderTarget> DocumentsSection<T> {
    pub fn setup(documents: Arc<[Document]>, body: T) -> Self {
        let libraries = filter::library_options(&documents);
        let mut section = Self {
            documents,
            libraries,
            criteria: DocumentCriteria::default(),
            body,
        };
        section.apply();
        section
    }

    pub fn library_options(&self) -> &[String] {
        &self.libraries
    }

    pub fn set_library(&mut self, library: &str) -> usize {
        self.criteria.library = Some(library.to_string());
        self.apply()
    }

    pub fn set_sensitivity(&mut self, sensitivity: &str) -> usize {
        self.criteria.sensitivity = Some(sensitivity.to_string());
        self.apply()
    }

    pub fn set_teams(&mut self, teams: Option<bool>) -> usize {
        self.criteria.teams = teams;
        self.apply()
    }

    pub fn set_criteria(&mut self, criteria: DocumentCriteria) -> usize {
        self.criteria = criteria;
        self.apply()
    }

    pub fn apply(&mut self) -> usize {
        let filtered = filter::filter_documents(&self.documents, &self.criteria);
        render_documents(&filtered, &mut self.body);
        filtered.len()
    }

    pub fn criteria(&self) -> &DocumentCriteria {
        &self.criteria
    }

    pub fn body(&self) -> &T {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Cell, Row, NO_PAGES_MESSAGE};

    #[derive(Default)]
    struct RecordingTarget {
        replaced: usize,
        appended: Vec<Row>,
    }

    impl RenderTarget for RecordingTarget {
        fn replace_children(&mut self, rows: Vec<Row>) {
            self.replaced += 1;
            self.appended = rows;
        }

        fn append_child(&mut self, row: Row) {
            self.appended.push(row);
        }
    }

    fn page(title: &str, status: &str, score: i64) -> Page {
        Page {
            title: title.to_string(),
            url: format!("/{}", title.to_lowercase()),
            owner: "Web".to_string(),
            status: status.to_string(),
            last_reviewed: "2024-01-01".to_string(),
            accessibility_score: score,
            issues_count: 0,
            priority: None,
        }
    }

    fn doc(name: &str, library: &str, synced: bool) -> Document {
        Document {
            name: name.to_string(),
            library: library.to_string(),
            owner: "Records".to_string(),
            last_modified: "2024-01-01".to_string(),
            sensitivity: "Public".to_string(),
            retention_label: "None".to_string(),
            synced_to_teams: synced,
        }
    }

    fn first_cells(body: &TableBody) -> Vec<String> {
        body.rows()
            .iter()
            .map(|r| r.cells[0].display_text())
            .collect()
    }

    #[test]
    fn setup_renders_full_collection() {
        let pages: Arc<[Page]> =
            vec![page("Home", "Published", 70), page("Contact", "Draft", 40)].into();
        let section = PagesSection::setup(pages, TableBody::default());
        assert_eq!(section.body().rows().len(), 2);
    }

    #[test]
    fn controls_always_refilter_the_original_collection() {
        let pages: Arc<[Page]> = vec![
            page("Home", "Published", 70),
            page("Contact", "Draft", 40),
            page("News", "Published", 90),
        ]
        .into();
        let mut section = PagesSection::setup(pages, TableBody::default());

        assert_eq!(section.set_status("Draft"), 1);
        assert_eq!(first_cells(section.body()), vec!["Contact (/contact)"]);

        // widening the status brings back rows the previous pass dropped
        assert_eq!(section.set_status(""), 3);
        assert_eq!(section.set_min_accessibility(Some(80)), 1);
        assert_eq!(first_cells(section.body()), vec!["News (/news)"]);

        assert_eq!(section.set_search("zzz"), 0);
        assert!(section.body().is_placeholder());
        assert_eq!(
            section.body().rows()[0].cells[0],
            Cell::Placeholder {
                message: NO_PAGES_MESSAGE.to_string(),
                colspan: 7
            }
        );
    }

    #[test]
    fn renders_through_any_target() {
        let pages: Arc<[Page]> = vec![page("Home", "Published", 70)].into();
        let mut section = PagesSection::setup(pages, RecordingTarget::default());
        section.set_search("home");
        assert_eq!(section.body().replaced, 2);
        assert_eq!(section.body().appended.len(), 1);
    }

    #[test]
    fn documents_section_derives_library_options_once() {
        let docs: Arc<[Document]> = vec![
            doc("b.docx", "Projects", true),
            doc("a.docx", "Finance", false),
            doc("c.docx", "Projects", false),
        ]
        .into();
        let mut section = DocumentsSection::setup(docs, TableBody::default());
        assert_eq!(section.library_options(), ["Finance", "Projects"]);

        assert_eq!(section.set_library("Projects"), 2);
        assert_eq!(section.set_teams(Some(false)), 1);
        assert_eq!(first_cells(section.body()), vec!["c.docx"]);
        assert_eq!(section.library_options(), ["Finance", "Projects"]);
    }
}
