//! GitHub REST adapter for the pull request host port.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::checklist::{
    domain::{
        CheckRun, CommentId, IssueComment, Label, LabelSet, PullRequest, PullRequestNumber,
    },
    ports::{PullRequestHost, PullRequestHostError, PullRequestHostResult},
};

const PAGE_SIZE: usize = 100;
const API_VERSION: &str = "2022-11-28";
const CLIENT_USER_AGENT: &str = concat!("checklist-gate/", env!("CARGO_PKG_VERSION"));

/// Connection settings for the GitHub REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubHostConfig {
    /// Base API URL, e.g. `https://api.github.com`.
    pub api_url: String,
    /// Repository in `owner/repo` form.
    pub repository: String,
    /// Token used as a bearer credential.
    pub token: String,
}

/// Pull request host backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubPullRequestHost {
    client: Client,
    repository_url: String,
}

#[derive(Deserialize)]
struct RawPullRequest {
    number: u64,
    head: RawHead,
}

#[derive(Deserialize)]
struct RawHead {
    sha: String,
}

#[derive(Deserialize)]
struct RawComment {
    id: u64,
    #[serde(default)]
    body: Option<String>,
}

#[derive(Deserialize)]
struct RawLabel {
    name: String,
}

impl GitHubPullRequestHost {
    /// Creates a host client with authentication headers preset.
    ///
    /// # Errors
    ///
    /// Returns [`PullRequestHostError::Transport`] when the token is not a
    /// valid header value or the HTTP client cannot be built.
    pub fn new(config: &GitHubHostConfig) -> PullRequestHostResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(PullRequestHostError::transport)?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(PullRequestHostError::transport)?;
        Ok(Self {
            client,
            repository_url: format!(
                "{}/repos/{}",
                config.api_url.trim_end_matches('/'),
                config.repository
            ),
        })
    }

    async fn send(
        operation: &'static str,
        request: RequestBuilder,
    ) -> PullRequestHostResult<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(PullRequestHostError::transport)?;
        let status = response.status();
        debug!(operation, status = status.as_u16(), "host responded");
        if !status.is_success() {
            return Err(PullRequestHostError::UnexpectedStatus {
                operation,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: &str,
    ) -> PullRequestHostResult<T> {
        Self::send(operation, self.client.get(url))
            .await?
            .json()
            .await
            .map_err(PullRequestHostError::transport)
    }

    async fn get_all_pages<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: &str,
    ) -> PullRequestHostResult<Vec<T>> {
        let mut items = Vec::new();
        for page in 1_usize.. {
            let page_url = format!("{url}?per_page={PAGE_SIZE}&page={page}");
            let batch: Vec<T> = self.get_json(operation, &page_url).await?;
            let is_last = batch.len() < PAGE_SIZE;
            items.extend(batch);
            if is_last {
                break;
            }
        }
        Ok(items)
    }
}

#[async_trait]
impl PullRequestHost for GitHubPullRequestHost {
    async fn fetch_pull_request(
        &self,
        number: PullRequestNumber,
    ) -> PullRequestHostResult<PullRequest> {
        let url = format!("{}/pulls/{number}", self.repository_url);
        let raw = match self.get_json::<RawPullRequest>("get pull request", &url).await {
            Err(PullRequestHostError::UnexpectedStatus { status, .. })
                if status == StatusCode::NOT_FOUND.as_u16() =>
            {
                return Err(PullRequestHostError::NotFound(number));
            }
            other => other?,
        };
        PullRequest::from_parts(raw.number, &raw.head.sha).map_err(PullRequestHostError::transport)
    }

    async fn list_comments(
        &self,
        number: PullRequestNumber,
    ) -> PullRequestHostResult<Vec<IssueComment>> {
        let url = format!("{}/issues/{number}/comments", self.repository_url);
        let raw: Vec<RawComment> = self.get_all_pages("list comments", &url).await?;
        raw.into_iter()
            .map(|comment| -> PullRequestHostResult<IssueComment> {
                let id = CommentId::new(comment.id).map_err(PullRequestHostError::transport)?;
                Ok(IssueComment::new(id, comment.body.unwrap_or_default()))
            })
            .collect()
    }

    async fn list_labels(&self, number: PullRequestNumber) -> PullRequestHostResult<LabelSet> {
        let url = format!("{}/issues/{number}/labels", self.repository_url);
        let raw: Vec<RawLabel> = self.get_all_pages("list labels", &url).await?;
        raw.into_iter()
            .map(|label| Label::new(label.name).map_err(PullRequestHostError::transport))
            .collect()
    }

    async fn upsert_comment(
        &self,
        number: PullRequestNumber,
        body: &str,
        existing: Option<CommentId>,
    ) -> PullRequestHostResult<()> {
        let payload = json!({ "body": body });
        let (operation, request) = match existing {
            Some(id) => (
                "update comment",
                self.client
                    .patch(format!("{}/issues/comments/{id}", self.repository_url)),
            ),
            None => (
                "create comment",
                self.client
                    .post(format!("{}/issues/{number}/comments", self.repository_url)),
            ),
        };
        Self::send(operation, request.json(&payload)).await?;
        Ok(())
    }

    async fn create_check_run(&self, check_run: &CheckRun) -> PullRequestHostResult<()> {
        let url = format!("{}/check-runs", self.repository_url);
        Self::send("create check run", self.client.post(url).json(check_run)).await?;
        Ok(())
    }
}
