//! HTTP adapter for the voting server

use super::error::{HttpError, Result};
use async_trait::async_trait;
use derby_application::{ApiError, BehaviorConfig, VoteAccepted, VoteApi, VoteStatus};
use derby_domain::VoteSubmission;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use tracing::{debug, info};

const CHECK_VOTE_PATH: &str = "check-vote";
const VOTE_PATH: &str = "vote";
const VOTE_CODE_FIELD: &str = "vote_code";

/// User-Agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("derby-vote/", env!("CARGO_PKG_VERSION"));

/// Body the server sends along with a rejection
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Parse and check a server base URL (absolute http or https)
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let invalid = |reason: &str| HttpError::InvalidUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(invalid("URL has no host"));
    }
    Ok(url)
}

/// [`VoteApi`] implementation over HTTP
///
/// Keeps a cookie store so the vote check and vote submission share the
/// server-side session, the way a browser tab would.
pub struct HttpVoteApi {
    client: Client,
    base_url: Url,
}

impl HttpVoteApi {
    /// Create an adapter for the server at `base_url`
    pub fn new(base_url: &str, behavior: &BehaviorConfig, user_agent: &str) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = Client::builder().cookie_store(true).user_agent(user_agent);
        if let Some(timeout) = behavior.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(HttpError::ClientBuild)?;

        info!("HttpVoteApi targeting {}", base_url);

        Ok(Self { client, base_url })
    }

    /// Create an adapter with an existing client (for testing)
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join path segments onto the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| HttpError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch_vote_status(&self) -> Result<VoteStatus> {
        let url = self.endpoint(&[CHECK_VOTE_PATH])?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let body = Self::success_body(response).await?;

        serde_json::from_str(&body).map_err(|e| HttpError::ParseError {
            error: e.to_string(),
            raw: body.clone(),
        })
    }

    async fn post_vote(&self, submission: &VoteSubmission) -> Result<VoteAccepted> {
        let url = self.endpoint(&[VOTE_PATH, submission.item_id.as_str()])?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .form(&[(VOTE_CODE_FIELD, submission.code.as_str())])
            .send()
            .await?;
        let body = Self::success_body(response).await?;

        // Any JSON counts as acceptance; only `message` is picked out.
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| HttpError::ParseError {
                error: e.to_string(),
                raw: body.clone(),
            })?;
        let message = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);

        Ok(VoteAccepted { message })
    }

    /// Read the body, turning non-2xx statuses into [`HttpError::Status`]
    async fn success_body(response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .map(|b| b.error);
            debug!("Server answered HTTP {}: {}", status.as_u16(), body);
            return Err(HttpError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl VoteApi for HttpVoteApi {
    async fn check_vote(&self) -> std::result::Result<VoteStatus, ApiError> {
        self.fetch_vote_status().await.map_err(ApiError::from)
    }

    async fn submit_vote(
        &self,
        submission: &VoteSubmission,
    ) -> std::result::Result<VoteAccepted, ApiError> {
        self.post_vote(submission).await.map_err(ApiError::from)
    }
}
