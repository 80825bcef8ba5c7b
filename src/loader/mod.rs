use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{Collections, Document, Page};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    FilePath(String),
    Url(String),
    Inline(String),
}

impl DataSource {
    /// `http://` and `https://` prefixes select a remote fetch; anything else
    /// is read from disk.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::FilePath(crate::config::expand_tilde_string(trimmed))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    pub fn describe(&self) -> String {
        match self {
            Self::FilePath(path) => path.clone(),
            Self::Url(url) => url.clone(),
            Self::Inline(_) => "<inline>".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build HTTP client: {source}")]
    HttpClientBuild {
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to fetch {kind}: {url}: {source}")]
    Fetch {
        kind: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} fetching {kind}: {url}")]
    Status {
        kind: &'static str,
        url: String,
        status: u16,
    },

    #[error("failed to read {kind}: {path}: {source}")]
    FileRead {
        kind: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {kind} from {origin}: {source}")]
    Parse {
        kind: &'static str,
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            Self::HttpClientBuild { .. } => None,
            Self::Fetch { kind, .. }
            | Self::Status { kind, .. }
            | Self::FileRead { kind, .. }
            | Self::Parse { kind, .. } => Some(kind),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    /// Applies to remote sources only.
    pub timeout: Option<Duration>,
}

fn build_client(options: &LoadOptions) -> Result<reqwest::Client, LoadError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| LoadError::HttpClientBuild { source: e })
}

async fn fetch_text(
    kind: &'static str,
    source: &DataSource,
    client: Option<&reqwest::Client>,
) -> Result<String, LoadError> {
    match source {
        DataSource::Inline(body) => Ok(body.clone()),
        DataSource::FilePath(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| LoadError::FileRead {
                    kind,
                    path: path.clone(),
                    source: e,
                })
        }
        DataSource::Url(url) => {
            let client = match client {
                Some(client) => client.clone(),
                None => build_client(&LoadOptions::default())?,
            };
            tracing::debug!(kind, %url, "fetching");
            let response = client.get(url).send().await.map_err(|e| LoadError::Fetch {
                kind,
                url: url.clone(),
                source: e,
            })?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status {
                    kind,
                    url: url.clone(),
                    status: status.as_u16(),
                });
            }
            response.text().await.map_err(|e| LoadError::Fetch {
                kind,
                url: url.clone(),
                source: e,
            })
        }
    }
}

fn parse_collection<T: DeserializeOwned>(
    kind: &'static str,
    source: &DataSource,
    body: &str,
) -> Result<Vec<T>, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Parse {
        kind,
        origin: source.describe(),
        source: e,
    })
}

/// Fetches both datasets concurrently and parses them. Either failure aborts
/// the whole load; a half-loaded pair is never returned.
pub async fn load_collections(
    pages_source: &DataSource,
    documents_source: &DataSource,
    options: &LoadOptions,
) -> Result<Collections, LoadError> {
    let client = if pages_source.is_remote() || documents_source.is_remote() {
        Some(build_client(options)?)
    } else {
        None
    };

    let (pages_body, documents_body) = futures::future::try_join(
        fetch_text("pages", pages_source, client.as_ref()),
        fetch_text("documents", documents_source, client.as_ref()),
    )
    .await?;

    let pages: Vec<Page> = parse_collection("pages", pages_source, &pages_body)?;
    let documents: Vec<Document> =
        parse_collection("documents", documents_source, &documents_body)?;
    tracing::debug!(
        pages = pages.len(),
        documents = documents.len(),
        "collections loaded"
    );

    Ok(Collections::new(pages, documents))
}
