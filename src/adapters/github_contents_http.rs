//! GitHub repository contents API client using reqwest.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AccessToken, AppError, ForgeApiConfig, RepositoryReference};
use crate::ports::{ContentWrite, ForgeContents, RemoteFile};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const X_GITHUB_API_VERSION: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const DEFAULT_STATUS_MESSAGE: &str = "GitHub API request failed";

/// HTTP transport for the contents endpoints. One request per call, no retries.
#[derive(Clone)]
pub struct GitHubContentsClient {
    token: AccessToken,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for GitHubContentsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubContentsClient")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl GitHubContentsClient {
    pub fn new(token: AccessToken, config: &ForgeApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::ForgeApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { token, api_url: config.api_url.clone(), client })
    }

    fn contents_url(&self, repo: &RepositoryReference, path: &str) -> Result<Url, AppError> {
        let raw = format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url.as_str().trim_end_matches('/'),
            repo.owner(),
            repo.name(),
            path.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|e| AppError::ForgeApi {
            message: format!("Invalid contents URL {}: {}", raw, e),
            status: None,
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(AUTHORIZATION, format!("Bearer {}", self.token.expose()))
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header(X_GITHUB_API_VERSION, API_VERSION)
    }
}

#[derive(Debug, Serialize)]
struct PutContentRequest<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    sha: String,
}

fn transport_error(e: reqwest::Error) -> AppError {
    AppError::ForgeApi { message: format!("HTTP request failed: {}", e), status: None }
}

fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let body_text = response.text().unwrap_or_default();

    let message = extract_error_message(&body_text).unwrap_or_else(|| {
        if !body_text.trim().is_empty() {
            body_text.clone()
        } else {
            status.canonical_reason().unwrap_or(DEFAULT_STATUS_MESSAGE).to_string()
        }
    });

    AppError::ForgeApi { message, status: Some(status.as_u16()) }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl ForgeContents for GitHubContentsClient {
    fn get_content(
        &self,
        repo: &RepositoryReference,
        path: &str,
    ) -> Result<Option<RemoteFile>, AppError> {
        let url = self.contents_url(repo, path)?;
        tracing::debug!(%url, "Looking up existing workflow");

        let response = self.authorize(self.client.get(url)).send().map_err(transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(error_from_response(response));
        }

        let body: ContentResponse = response.json().map_err(|e| AppError::ForgeApi {
            message: format!("Failed to parse response: {}", e),
            status: Some(status.as_u16()),
        })?;
        Ok(Some(RemoteFile { sha: body.sha }))
    }

    fn put_content(
        &self,
        repo: &RepositoryReference,
        path: &str,
        write: ContentWrite<'_>,
    ) -> Result<(), AppError> {
        let url = self.contents_url(repo, path)?;
        let request = PutContentRequest {
            message: write.message,
            content: STANDARD.encode(write.content),
            sha: write.sha,
        };

        let response =
            self.authorize(self.client.put(url)).json(&request).send().map_err(transport_error)?;

        if response.status().is_success() { Ok(()) } else { Err(error_from_response(response)) }
    }
}
