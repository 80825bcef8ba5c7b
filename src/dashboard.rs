use crate::loader::{self, DataSource, LoadError, LoadOptions};
use crate::model::Collections;
use crate::render::{DocumentsSection, HostDocument, PagesSection, TableBody};
use crate::summary::Summary;

/// The one message shown to users when either dataset cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "There was a problem loading the dashboard data.";

/// A fully set-up dashboard, or an unrendered one carrying the error banner.
#[derive(Clone, Debug, Default)]
pub struct Dashboard {
    host: HostDocument,
    summary: Option<Summary>,
    pages: Option<PagesSection<TableBody>>,
    documents: Option<DocumentsSection<TableBody>>,
    failure: Option<String>,
}

impl Dashboard {
    /// Loads both datasets and sets everything up, or nothing at all.
    pub async fn init(
        pages: &DataSource,
        documents: &DataSource,
        options: &LoadOptions,
    ) -> Self {
        match loader::load_collections(pages, documents, options).await {
            Ok(collections) => Self::setup(&collections),
            Err(e) => Self::failed(&e),
        }
    }

    pub fn setup(collections: &Collections) -> Self {
        let mut dashboard = Self::default();
        dashboard.render_summary(collections);

        dashboard.pages = Some(PagesSection::setup(
            collections.pages.clone(),
            TableBody::default(),
        ));

        let documents =
            DocumentsSection::setup(collections.documents.clone(), TableBody::default());
        for library in documents.library_options() {
            dashboard.host.append_library_option(library);
        }
        dashboard.documents = Some(documents);

        tracing::info!(
            pages = collections.pages.len(),
            documents = collections.documents.len(),
            "dashboard ready"
        );
        dashboard
    }

    pub fn failed(error: &LoadError) -> Self {
        tracing::error!(error = %error, "error loading data");
        let mut dashboard = Self::default();
        dashboard.host.append_banner(LOAD_ERROR_MESSAGE);
        dashboard.failure = Some(error.to_string());
        dashboard
    }

    fn render_summary(&mut self, collections: &Collections) {
        let summary = Summary::compute(&collections.pages, &collections.documents);
        for (id, value) in summary.fields() {
            self.host.set_text(id, value);
        }
        self.summary = Some(summary);
    }

    pub fn host(&self) -> &HostDocument {
        &self.host
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn pages(&self) -> Option<&PagesSection<TableBody>> {
        self.pages.as_ref()
    }

    pub fn pages_mut(&mut self) -> Option<&mut PagesSection<TableBody>> {
        self.pages.as_mut()
    }

    pub fn documents(&self) -> Option<&DocumentsSection<TableBody>> {
        self.documents.as_ref()
    }

    pub fn documents_mut(&mut self) -> Option<&mut DocumentsSection<TableBody>> {
        self.documents.as_mut()
    }

    /// The detailed load failure, for logs and exit status. Users only ever
    /// see [`LOAD_ERROR_MESSAGE`].
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.failure.is_none()
    }
}
