use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;

use crate::dashboard::Dashboard;
use crate::filter::{CriteriaError, DocumentCriteria, PageCriteria};
use crate::loader::{DataSource, LoadOptions};

#[derive(Clone, Debug)]
pub struct Options {
    pub pages: DataSource,
    pub documents: DataSource,
    pub page_criteria: PageCriteria,
    pub document_criteria: DocumentCriteria,
    pub timeout_seconds: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pages: DataSource::FilePath("./pages.json".to_string()),
            documents: DataSource::FilePath("./documents.json".to_string()),
            page_criteria: PageCriteria::default(),
            document_criteria: DocumentCriteria::default(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("no {kind} source provided")]
    EmptySource { kind: &'static str },

    #[error("invalid filter criteria: {0}")]
    InvalidCriteria(#[from] CriteriaError),

    #[error("invalid timeout {value}, expected positive integer")]
    InvalidTimeout { value: u64 },
}

#[derive(Clone, Debug)]
pub struct DashboardResult {
    pub elapsed: Duration,
    pub dashboard: Dashboard,
    pub page_matches: Option<usize>,
    pub document_matches: Option<usize>,
}

impl DashboardResult {
    pub fn is_loaded(&self) -> bool {
        self.dashboard.is_loaded()
    }
}

#[derive(Clone, Debug)]
pub struct Runner {
    options: Options,
}

fn source_is_blank(source: &DataSource) -> bool {
    match source {
        DataSource::FilePath(s) | DataSource::Url(s) => s.trim().is_empty(),
        DataSource::Inline(_) => false,
    }
}

impl Runner {
    pub fn new(options: Options) -> Result<Self, RunnerError> {
        if source_is_blank(&options.pages) {
            return Err(RunnerError::EmptySource { kind: "pages" });
        }
        if source_is_blank(&options.documents) {
            return Err(RunnerError::EmptySource { kind: "documents" });
        }
        if let Some(min) = options.page_criteria.min_accessibility {
            if min > 100 {
                return Err(CriteriaError::MinAccessibilityOutOfRange {
                    value: i64::from(min),
                }
                .into());
            }
        }
        if let Some(0) = options.timeout_seconds {
            return Err(RunnerError::InvalidTimeout { value: 0 });
        }
        Ok(Self { options })
    }

    /// Loads, sets up and applies the configured criteria. A load failure is
    /// not an `Err`: it yields a dashboard showing only the error banner.
    pub async fn run(&self) -> DashboardResult {
        let started_at = Instant::now();
        let load_options = LoadOptions {
            timeout: self.options.timeout_seconds.map(Duration::from_secs),
        };

        let mut dashboard =
            Dashboard::init(&self.options.pages, &self.options.documents, &load_options).await;

        let page_matches = dashboard
            .pages_mut()
            .map(|section| section.set_criteria(self.options.page_criteria.clone()));
        let document_matches = dashboard
            .documents_mut()
            .map(|section| section.set_criteria(self.options.document_criteria.clone()));

        if let (Some(pages), Some(documents)) = (page_matches, document_matches) {
            tracing::debug!(pages, documents, "criteria applied");
        }

        DashboardResult {
            elapsed: started_at.elapsed(),
            dashboard,
            page_matches,
            document_matches,
        }
    }
}
