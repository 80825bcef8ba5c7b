use itertools::Itertools;
use serde::Serialize;

use super::{selected, CriteriaError};
use crate::model::Document;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DocumentCriteria {
    pub library: Option<String>,
    pub sensitivity: Option<String>,
    pub teams: Option<bool>,
}

impl DocumentCriteria {
    pub fn matches(&self, document: &Document) -> bool {
        let matches_library =
            selected(self.library.as_deref()).map_or(true, |lib| document.library == lib);
        let matches_sensitivity = selected(self.sensitivity.as_deref())
            .map_or(true, |sens| document.sensitivity == sens);
        let matches_teams = self
            .teams
            .map_or(true, |synced| document.synced_to_teams == synced);
        matches_library && matches_sensitivity && matches_teams
    }

    pub fn is_empty(&self) -> bool {
        selected(self.library.as_deref()).is_none()
            && selected(self.sensitivity.as_deref()).is_none()
            && self.teams.is_none()
    }
}

pub fn filter_documents<'a>(
    documents: &'a [Document],
    criteria: &DocumentCriteria,
) -> Vec<&'a Document> {
    documents.iter().filter(|d| criteria.matches(d)).collect()
}

/// Distinct library names, sorted, for the library selector.
pub fn library_options(documents: &[Document]) -> Vec<String> {
    documents
        .iter()
        .map(|d| d.library.as_str())
        .sorted()
        .dedup()
        .map(str::to_string)
        .collect()
}

/// The selector carries the boolean's text form; only `true` and `false`
/// are accepted.
pub fn parse_teams(raw: &str) -> Result<Option<bool>, CriteriaError> {
    match raw.trim() {
        "" => Ok(None),
        "true" => Ok(Some(true)),
        "false" => Ok(Some(false)),
        _ => Err(CriteriaError::InvalidTeams {
            value: raw.to_string(),
        }),
    }
}
