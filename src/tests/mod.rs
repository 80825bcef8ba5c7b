use crate::dashboard::{Dashboard, LOAD_ERROR_MESSAGE};
use crate::filter::{filter_documents, filter_pages, DocumentCriteria, PageCriteria};
use crate::loader::{DataSource, LoadOptions};
use crate::model::{Collections, Document, Page};
use crate::render::{render_pages, Cell, TableBody, NO_PAGES_MESSAGE};
use crate::runner::{Options, Runner};
use crate::summary::{self, Summary};

const SCENARIO_PAGES: &str = r#"[
    {"title":"Home","url":"/home","owner":"Web Team","status":"Published","lastReviewed":"2024-01-10","accessibilityScore":70,"issuesCount":0,"priority":"Low"},
    {"title":"Contact","url":"/contact","owner":"Web Team","status":"Draft","lastReviewed":"2024-02-01","accessibilityScore":40,"issuesCount":3,"priority":"High"}
]"#;

const SCENARIO_DOCUMENTS: &str = r#"[
    {"name":"Brochure.pdf","library":"Marketing","owner":"Comms","lastModified":"2024-01-05","sensitivity":"Public","retentionLabel":"1 year","syncedToTeams":true},
    {"name":"Handbook.pdf","library":"HR","owner":"People","lastModified":"2024-01-06","sensitivity":"Internal","retentionLabel":"Permanent","syncedToTeams":false},
    {"name":"Salaries.xlsx","library":"HR","owner":"People","lastModified":"2024-01-07","sensitivity":"Restricted","retentionLabel":"7 years","syncedToTeams":false}
]"#;

fn scenario() -> Collections {
    let pages: Vec<Page> = serde_json::from_str(SCENARIO_PAGES).unwrap();
    let documents: Vec<Document> = serde_json::from_str(SCENARIO_DOCUMENTS).unwrap();
    Collections::new(pages, documents)
}

fn first_cells(body: &TableBody) -> Vec<String> {
    body.rows()
        .iter()
        .map(|r| r.cells[0].display_text())
        .collect()
}

#[test]
fn no_criteria_renders_every_page_in_order() {
    let collections = scenario();
    let filtered = filter_pages(&collections.pages, &PageCriteria::default());
    let mut body = TableBody::default();
    render_pages(&filtered, &mut body);
    assert_eq!(
        first_cells(&body),
        vec!["Home (/home)", "Contact (/contact)"]
    );
}

#[test]
fn draft_status_yields_only_contact() {
    let collections = scenario();
    let criteria = PageCriteria {
        status: Some("Draft".to_string()),
        ..Default::default()
    };
    let filtered = filter_pages(&collections.pages, &criteria);
    let mut body = TableBody::default();
    render_pages(&filtered, &mut body);
    assert_eq!(first_cells(&body), vec!["Contact (/contact)"]);
    assert_eq!(body.rows()[0].cells[6].display_text(), "High");
}

#[test]
fn empty_result_renders_single_placeholder_row() {
    let collections = scenario();
    let criteria = PageCriteria {
        search: Some("pricing".to_string()),
        ..Default::default()
    };
    let filtered = filter_pages(&collections.pages, &criteria);
    let mut body = TableBody::default();
    render_pages(&filtered, &mut body);
    assert_eq!(body.rows().len(), 1);
    assert_eq!(
        body.rows()[0].cells,
        vec![Cell::Placeholder {
            message: NO_PAGES_MESSAGE.to_string(),
            colspan: 7
        }]
    );
}

#[test]
fn document_filters_are_idempotent() {
    let collections = scenario();
    let criteria = DocumentCriteria {
        library: Some("HR".to_string()),
        teams: Some(false),
        ..Default::default()
    };
    let once: Vec<Document> = filter_documents(&collections.documents, &criteria)
        .into_iter()
        .cloned()
        .collect();
    let twice: Vec<Document> = filter_documents(&once, &criteria)
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(once.len(), 2);
    assert_eq!(once, twice);
}

#[test]
fn summary_over_scenario_data() {
    let collections = scenario();
    let summary = Summary::compute(&collections.pages, &collections.documents);
    assert_eq!(
        summary,
        Summary {
            total_pages: 2,
            pages_with_issues: 1,
            average_accessibility: 55,
            total_documents: 3,
            sensitive_documents: 2,
        }
    );
}

#[test]
fn dashboard_controls_track_the_full_collection() {
    let mut dashboard = Dashboard::setup(&scenario());
    let pages = dashboard.pages_mut().unwrap();
    assert_eq!(pages.set_min_accessibility(Some(50)), 1);
    assert_eq!(pages.set_min_accessibility(None), 2);
    assert_eq!(pages.set_search("CONTACT"), 1);

    let documents = dashboard.documents_mut().unwrap();
    assert_eq!(documents.set_sensitivity("Internal"), 1);
    assert_eq!(documents.set_sensitivity(""), 3);
    assert_eq!(dashboard.host().text(summary::TOTAL_DOCS_ID), Some("3"));
}

#[tokio::test]
async fn both_sources_failing_leaves_only_the_banner() {
    let dir = tempfile::tempdir().unwrap();
    let missing_pages = dir.path().join("pages.json");
    let missing_docs = dir.path().join("documents.json");

    let dashboard = Dashboard::init(
        &DataSource::FilePath(missing_pages.to_string_lossy().to_string()),
        &DataSource::FilePath(missing_docs.to_string_lossy().to_string()),
        &LoadOptions::default(),
    )
    .await;

    for id in summary::FIELD_IDS {
        assert_eq!(dashboard.host().text(id), None);
    }
    assert!(dashboard.pages().is_none());
    assert!(dashboard.documents().is_none());
    assert_eq!(dashboard.host().banners().len(), 1);
    assert_eq!(dashboard.host().banners()[0], LOAD_ERROR_MESSAGE);
}

#[tokio::test]
async fn one_source_failing_withholds_both_sections() {
    let dir = tempfile::tempdir().unwrap();
    let pages_path = dir.path().join("pages.json");
    std::fs::write(&pages_path, SCENARIO_PAGES).unwrap();

    let runner = Runner::new(Options {
        pages: DataSource::FilePath(pages_path.to_string_lossy().to_string()),
        documents: DataSource::FilePath(
            dir.path().join("absent.json").to_string_lossy().to_string(),
        ),
        ..Options::default()
    })
    .unwrap();
    let result = runner.run().await;

    assert!(!result.is_loaded());
    assert_eq!(result.page_matches, None);
    assert_eq!(result.document_matches, None);
    assert!(result.dashboard.summary().is_none());
    assert!(result.dashboard.failure().unwrap().contains("documents"));
}

#[tokio::test]
async fn end_to_end_html_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let pages_path = dir.path().join("pages.json");
    let docs_path = dir.path().join("documents.json");
    std::fs::write(&pages_path, SCENARIO_PAGES).unwrap();
    std::fs::write(&docs_path, SCENARIO_DOCUMENTS).unwrap();

    let runner = Runner::new(Options {
        pages: DataSource::parse(&pages_path.to_string_lossy()),
        documents: DataSource::parse(&docs_path.to_string_lossy()),
        document_criteria: DocumentCriteria {
            library: Some("HR".to_string()),
            ..Default::default()
        },
        ..Options::default()
    })
    .unwrap();
    let result = runner.run().await;
    assert_eq!(result.document_matches, Some(2));

    let report = crate::output::build_report(&result.dashboard);
    let html = String::from_utf8(crate::output::render_html(&report)).unwrap();
    assert!(html.contains("Handbook.pdf"));
    assert!(!html.contains("Brochure.pdf"));
    assert!(html.contains("Libraries: HR, Marketing"));
    assert!(html.contains("id=\"sensitive-docs\">2</div>"));
}
