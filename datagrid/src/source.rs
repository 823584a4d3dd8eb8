//! Data sources.
//!
//! A source receives the grid URL and a snapshot of the query parameters and
//! resolves to a [`Payload`]. Closures `Fn(SourceRequest, Vec<Value>) -> impl
//! Future` are sources, as is the built-in [`HttpSource`] registered as
//! `"post"`.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::SourceError;
use crate::params::QueryParameters;
use crate::result::Payload;

/// Shared handle to a source.
pub type SourceFn = Arc<dyn DataSource>;

/// Everything a source gets to see of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRequest {
    /// Configured grid URL (may be empty for non-network sources).
    pub url: String,
    /// Query parameters at dispatch time.
    pub params: QueryParameters,
}

/// Retrieves one page of data.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches data for `request`. `args` holds the options of a composite
    /// behavior and any arguments bound by `Registry::extend`.
    async fn fetch(&self, request: SourceRequest, args: Vec<Value>) -> Result<Payload, SourceError>;
}

#[async_trait]
impl<F, Fut> DataSource for F
where
    F: Fn(SourceRequest, Vec<Value>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Payload, SourceError>> + Send + 'static,
{
    async fn fetch(&self, request: SourceRequest, args: Vec<Value>) -> Result<Payload, SourceError> {
        (self)(request, args).await
    }
}

/// Wraps a closure as a shared source.
pub fn source_fn<F, Fut>(f: F) -> SourceFn
where
    F: Fn(SourceRequest, Vec<Value>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Payload, SourceError>> + Send + 'static,
{
    Arc::new(f)
}

/// A source bound to a snapshot of another source plus trailing arguments.
pub(crate) struct ExtendedSource {
    pub(crate) base: SourceFn,
    pub(crate) extra: Vec<Value>,
}

#[async_trait]
impl DataSource for ExtendedSource {
    async fn fetch(&self, request: SourceRequest, mut args: Vec<Value>) -> Result<Payload, SourceError> {
        args.extend(self.extra.iter().cloned());
        self.base.fetch(request, args).await
    }
}

/// POSTs the query parameters as a form to the grid URL and hands the
/// response body to the parser as text.
///
/// The engine enforces no timeout; set one here if the transport needs it.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpSource {
    /// Creates a source with a default HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an existing HTTP client.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Sets a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self, request: SourceRequest, _args: Vec<Value>) -> Result<Payload, SourceError> {
        let url = Url::parse(&request.url)
            .map_err(|e| SourceError::InvalidUrl(format!("{}: {e}", request.url)))?;

        log::debug!("[datagrid] POST {url}");

        let mut builder = self.client.post(url).form(&request.params.to_form_pairs());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(Payload::Text(body))
        } else {
            Err(SourceError::http(status.as_u16(), body))
        }
    }
}
