use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A site page as published in `pages.json`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub title: String,
    pub url: String,
    pub owner: String,
    pub status: String,
    pub last_reviewed: String,
    pub accessibility_score: i64,
    pub issues_count: u64,
    #[serde(default)]
    pub priority: Option<String>,
}

impl Page {
    pub fn priority(&self) -> Priority {
        Priority::from_raw(self.priority.as_deref())
    }
}

/// A document as published in `documents.json`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub name: String,
    pub library: String,
    pub owner: String,
    pub last_modified: String,
    pub sensitivity: String,
    pub retention_label: String,
    pub synced_to_teams: bool,
}

impl Document {
    pub fn is_sensitive(&self) -> bool {
        matches!(self.sensitivity.as_str(), "Internal" | "Restricted")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
    Unknown,
}

impl Priority {
    /// Anything other than the three known labels (including a missing value)
    /// collapses to `Unknown`. Matching is case-sensitive.
    pub fn from_raw(value: Option<&str>) -> Self {
        match value {
            Some("High") => Self::High,
            Some("Medium") => Self::Medium,
            Some("Low") => Self::Low,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Both datasets as loaded at startup. Cheap to clone, never mutated.
#[derive(Clone, Debug, Default)]
pub struct Collections {
    pub pages: Arc<[Page]>,
    pub documents: Arc<[Document]>,
}

impl Collections {
    pub fn new(pages: Vec<Page>, documents: Vec<Document>) -> Self {
        Self {
            pages: pages.into(),
            documents: documents.into(),
        }
    }
}
