// GitHub API HTTP client.
// Handles authentication, rate limiting, and request/response processing.

use std::sync::Mutex;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{ContribsError, Result};

use super::types::RateLimit;

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub API client with authentication and rate limit tracking.
///
/// Rate limit state sits behind a mutex so request methods take `&self` and
/// independent fetches can run concurrently on a shared client.
pub struct GitHubClient {
    client: Client,
    rate_limit: Mutex<RateLimit>,
}

impl GitHubClient {
    /// Create a new GitHub client with the given token.
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ContribsError::Other(e.to_string()))?,
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("contribs"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ContribsError::Api)?;

        Ok(Self {
            client,
            rate_limit: Mutex::new(RateLimit::default()),
        })
    }

    /// Create a client from the GITHUB_TOKEN environment variable.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN").map_err(|_| ContribsError::MissingToken)?;
        Self::new(&token)
    }

    /// Get the most recently observed rate limit information.
    pub fn rate_limit(&self) -> RateLimit {
        *self.rate_limit.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Make a GET request to the GitHub API.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", GITHUB_API_BASE, endpoint);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ContribsError::Api)?;

        self.update_rate_limit(&response);
        self.check_response(response).await
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", GITHUB_API_BASE, endpoint);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(ContribsError::Api)?;

        self.update_rate_limit(&response);
        self.check_response(response).await
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&self, response: &Response) {
        let mut rate_limit = self.rate_limit.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(limit) = header_u64(response, "x-ratelimit-limit") {
            rate_limit.limit = limit;
        }
        if let Some(remaining) = header_u64(response, "x-ratelimit-remaining") {
            rate_limit.remaining = remaining;
        }
        if let Some(reset) = header_u64(response, "x-ratelimit-reset") {
            rate_limit.reset = reset;
        }
    }

    /// Check response status and convert errors.
    async fn check_response(&self, response: Response) -> Result<Response> {
        match response.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => Ok(response),
            StatusCode::UNAUTHORIZED => Err(ContribsError::Unauthorized),
            StatusCode::NOT_FOUND => {
                let url = response.url().to_string();
                Err(ContribsError::NotFound(url))
            }
            StatusCode::FORBIDDEN => {
                // Check if rate limited
                let rate_limit = self.rate_limit();
                if rate_limit.remaining == 0 {
                    let reset_at = chrono::DateTime::from_timestamp(rate_limit.reset as i64, 0)
                        .map(|dt| dt.format("%H:%M:%S").to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    Err(ContribsError::RateLimited { reset_at })
                } else {
                    Err(ContribsError::Other(format!(
                        "Forbidden: {}",
                        response.text().await.unwrap_or_default()
                    )))
                }
            }
            status => Err(ContribsError::Other(format!(
                "HTTP {}: {}",
                status,
                response.text().await.unwrap_or_default()
            ))),
        }
    }
}

fn header_u64(response: &Response, name: &str) -> Option<u64> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

/// Whether a paginated response advertises a further page via the Link header.
pub(super) fn has_next_page(response: &Response) -> bool {
    response
        .headers()
        .get("link")
        .and_then(|v| v.to_str().ok())
        .is_some_and(link_has_next)
}

fn link_has_next(link: &str) -> bool {
    link.split(',')
        .any(|part| part.contains("rel=\"next\""))
}
