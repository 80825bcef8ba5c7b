pub mod documents;
pub mod pages;

use thiserror::Error;

pub use documents::{filter_documents, library_options, parse_teams, DocumentCriteria};
pub use pages::{filter_pages, parse_min_accessibility, PageCriteria};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("invalid minimum accessibility '{value}', expected an integer between 0 and 100")]
    InvalidMinAccessibility { value: String },

    #[error("minimum accessibility {value} is out of range, expected 0-100")]
    MinAccessibilityOutOfRange { value: i64 },

    #[error("invalid Teams sync value '{value}', expected 'true' or 'false'")]
    InvalidTeams { value: String },
}

/// An unset selector and an empty selector mean the same thing.
pub(crate) fn selected(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
