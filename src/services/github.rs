use crate::models::{GithubRepo, GithubUser, ProfileStats};
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

/// GitHub lists at most 100 repositories per page; we read a single page
const REPO_PAGE_SIZE: u32 = 100;

/// Timestamp format used by the GitHub REST API (`created_at`)
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// User-Agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("hiresmart-algo/", env!("CARGO_PKG_VERSION"));

/// Errors that can occur when talking to the GitHub API
///
/// These never reach an HTTP caller of our own API: the analyze handler
/// coerces them to default `ProfileStats` after logging.
#[derive(Debug, Error)]
pub enum GithubError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// GitHub REST API client
///
/// Handles the two public lookups the analysis needs:
/// - `GET /users/{username}` for repo count and account creation date
/// - `GET /users/{username}/repos?per_page=100` for the language tally
pub struct GithubClient {
    base_url: String,
    client: Client,
}

impl GithubClient {
    /// Create a new GitHub client
    ///
    /// `token` is optional; unauthenticated requests work against the public
    /// API but hit a much lower rate limit.
    pub fn new(base_url: String, token: Option<String>, timeout_secs: u64, user_agent: &str) -> Self {
        let mut headers = HeaderMap::new();
        // GitHub rejects requests without a User-Agent
        match HeaderValue::from_str(user_agent) {
            Ok(value) => {
                headers.insert(USER_AGENT, value);
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed user agent {:?}: {}", user_agent, e);
                headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
            }
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        if let Some(token) = token {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => {
                    tracing::warn!("Ignoring malformed GitHub token: {}", e);
                }
            }
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Fetch the public profile for a username
    pub async fn get_user(&self, username: &str) -> Result<GithubUser, GithubError> {
        let url = format!("{}/users/{}", self.base_url.trim_end_matches('/'), username);

        tracing::debug!("Fetching GitHub user from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GithubError::ApiError(format!(
                "Failed to fetch user {}: {}",
                username,
                response.status()
            )));
        }

        response
            .json::<GithubUser>()
            .await
            .map_err(|e| GithubError::InvalidResponse(format!("Failed to parse user: {}", e)))
    }

    /// List up to one page of the username's public repositories
    pub async fn list_repos(&self, username: &str) -> Result<Vec<GithubRepo>, GithubError> {
        let url = format!(
            "{}/users/{}/repos?per_page={}",
            self.base_url.trim_end_matches('/'),
            username,
            REPO_PAGE_SIZE
        );

        tracing::debug!("Fetching GitHub repos from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GithubError::ApiError(format!(
                "Failed to list repos for {}: {}",
                username,
                response.status()
            )));
        }

        response
            .json::<Vec<GithubRepo>>()
            .await
            .map_err(|e| GithubError::InvalidResponse(format!("Failed to parse repos: {}", e)))
    }

    /// Fetch profile statistics for a username
    ///
    /// The user lookup is authoritative: any failure there (network, non-200,
    /// malformed payload, unparseable timestamp) is an error and the caller
    /// falls back to default stats. The repository listing only feeds the
    /// language tally, so its failure degrades to `top_language: None`.
    ///
    /// The two GETs are independent reads and run concurrently.
    pub async fn profile_stats(&self, username: &str) -> Result<ProfileStats, GithubError> {
        let (user_result, repos_result) =
            tokio::join!(self.get_user(username), self.list_repos(username));

        let user = user_result?;
        let account_age_years = account_age_years(&user.created_at, Utc::now())?;

        let top_language = match repos_result {
            Ok(repos) => top_language(&repos),
            Err(e) => {
                tracing::warn!("Failed to list repositories for {}: {}", username, e);
                None
            }
        };

        Ok(ProfileStats {
            public_repository_count: user.public_repos,
            account_age_years,
            top_language,
        })
    }
}

/// Extract a GitHub username from a profile URL
///
/// Takes the last non-empty path segment after stripping one trailing slash,
/// e.g. "https://github.com/octocat/" -> "octocat". A bare username passes
/// through unchanged; no other validation is performed.
pub fn username_from_url(profile_url: &str) -> Option<String> {
    profile_url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// Age of an account in years, rounded to one decimal place
///
/// `created_at` uses the GitHub timestamp format `YYYY-MM-DDTHH:MM:SSZ`.
/// Clamped to zero for timestamps in the future.
pub fn account_age_years(created_at: &str, now: DateTime<Utc>) -> Result<f64, GithubError> {
    let created = NaiveDateTime::parse_from_str(created_at, CREATED_AT_FORMAT)
        .map_err(|e| {
            GithubError::InvalidResponse(format!("Bad created_at {:?}: {}", created_at, e))
        })?
        .and_utc();

    let age_days = (now - created).num_days() as f64;
    let years = (age_days / 365.25 * 10.0).round() / 10.0;
    Ok(years.max(0.0))
}

/// Most frequent declared language across a repository listing
///
/// Repositories without a declared language are ignored. Ties break to the
/// alphabetically first language so the result is deterministic.
pub fn top_language(repos: &[GithubRepo]) -> Option<String> {
    let mut tally: BTreeMap<&str, u32> = BTreeMap::new();
    for repo in repos {
        if let Some(lang) = repo.language.as_deref() {
            *tally.entry(lang).or_insert(0) += 1;
        }
    }

    tally
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
        .map(|(lang, _)| (*lang).to_string())
}
