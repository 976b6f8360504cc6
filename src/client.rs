#![deny(clippy::all, clippy::pedantic)]

use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use mapper_api_types::ErrorMessage;

use crate::args::Cli;

/// Shown when a failing endpoint returns no parseable `errorMessage` body.
pub const UNKNOWN_ERROR: &str = "Unknown error. Please contact your administrator.";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("site URL is required (use --site or MAPPER_SITE_URL)")]
    MissingSite,
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message} (status {status})")]
    Api { status: StatusCode, message: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Clone, Debug)]
pub struct Ctx {
    client: Client,
    base: Url,
    prefix: String,
}

impl Ctx {
    pub fn new(site: &str, prefix: &str) -> Result<Self, CliError> {
        let base = Url::parse(site)?.join("/")?;
        let client = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self {
            client,
            base,
            prefix: prefix.trim_matches('/').to_string(),
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("mapper-admin/", env!("CARGO_PKG_VERSION"))
    }

    /// Join a resource path onto the configured REST prefix.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.prefix, path.trim_start_matches('/'))
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<serde_json::Value>,
    ) -> Result<T, CliError> {
        let resp = self.send(method, path, query, body).await?;
        Self::decode(resp).await
    }

    /// Variant for endpoints that answer with an empty 200 body.
    pub async fn request_unit(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<serde_json::Value>,
    ) -> Result<(), CliError> {
        let resp = self.send(method, path, query, body).await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<serde_json::Value>,
    ) -> Result<Response, CliError> {
        let mut url = self.base.join(&self.endpoint(path))?;
        if let Some(q) = query {
            url.set_query(None);
            let mut qp = url.query_pairs_mut();
            for (k, v) in q {
                qp.append_pair(k, v);
            }
        }

        tracing::debug!(%method, %url, "sending request");
        let mut req = self.client.request(method, url);
        if let Some(b) = body {
            req = req.json(&b);
        }

        Ok(req.send().await?)
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, CliError> {
        let resp = Self::check(resp).await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| CliError::Decode(format!("failed to parse body: {e}")))
    }

    /// Turn a non-2xx response into an [`CliError::Api`], extracting the
    /// server-side message when the body carries one.
    async fn check(resp: Response) -> Result<Response, CliError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let bytes = resp.bytes().await.unwrap_or_default();
        let message = ErrorMessage::extract(&bytes).unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        Err(CliError::Api { status, message })
    }
}

pub fn build_ctx_from_cli(cli: &Cli) -> Result<Ctx, CliError> {
    let site = cli.site.as_deref().ok_or(CliError::MissingSite)?;
    Ctx::new(site, &cli.rest_prefix)
}
