use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("resource '{resource}' answered with status {status}")]
    UnexpectedStatus { resource: String, status: StatusCode },
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("could not read resource: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Where event resources are read from
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn fetch(&self, resource: &str) -> Result<Value, SourceError>;
}

#[async_trait]
impl<S: EventSource + ?Sized> EventSource for Box<S> {
    async fn fetch(&self, resource: &str) -> Result<Value, SourceError> {
        (**self).fetch(resource).await
    }
}

/// Static files served under a base URL, e.g. `https://host/events`
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }
}

#[async_trait]
impl EventSource for HttpSource {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, resource: &str) -> Result<Value, SourceError> {
        let url = self.resource_url(resource);

        debug!("Fetching {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(SourceError::UnexpectedStatus {
                resource: resource.to_string(),
                status,
            });
        }

        let body = response.text().await?;

        Ok(serde_json::from_str(&body)?)
    }
}

/// Event files in a local directory
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl EventSource for DirectorySource {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, resource: &str) -> Result<Value, SourceError> {
        let path = self.root.join(resource);

        debug!("Reading {}", path.display());

        let contents = tokio::fs::read_to_string(&path).await?;

        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn resource_url_should_not_double_slashes() {
        let source = HttpSource::new("http://localhost:3000/events/");

        assert_eq!(
            source.resource_url("cbta_2025.json"),
            "http://localhost:3000/events/cbta_2025.json"
        );
    }

    #[test_log::test(tokio::test)]
    async fn missing_file_should_be_an_io_error() {
        let source = DirectorySource::new(std::env::temp_dir().join("eventosia-does-not-exist"));

        let result = source.fetch("nothing.json").await;

        assert!(matches!(result, Err(SourceError::Io(_))), "{:?}", result);
    }
}
