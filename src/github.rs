use crate::error::{Result, StarSweepError};
use crate::sweep::StarPlatform;
use crate::types::{GitHubRepo, GitHubUser, RateLimit, RateLimitResponse};
use reqwest::{Client, Method, Response, StatusCode};
use std::time::Duration;

const API_BASE_URL: &str = "https://api.github.com";
const PER_PAGE: usize = 100;

pub struct GitHubClient {
    client: Client,
    token: String,
}

impl GitHubClient {
    pub fn new(token: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent("Star Sweep/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient { client, token })
    }

    async fn send(&self, method: Method, url: &str) -> Result<Response> {
        let response = self
            .client
            .request(method, url)
            .header("Accept", "application/vnd.github.v3+json")
            .header("Authorization", format!("token {}", self.token))
            .send()
            .await?;

        Ok(response)
    }

    /// Issue a GET and map non-success statuses to typed errors.
    async fn get_checked(&self, url: &str) -> Result<Response> {
        let response = self.send(Method::GET, url).await?;

        let rate_limit_remaining = response
            .headers()
            .get("X-RateLimit-Remaining")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok());

        match response.status() {
            StatusCode::OK => Ok(response),
            StatusCode::NOT_FOUND => {
                Err(StarSweepError::NotFound(format!("Resource not found: {}", url)))
            }
            StatusCode::UNAUTHORIZED => {
                Err(StarSweepError::AuthError("Token was rejected by GitHub".to_string()))
            }
            StatusCode::FORBIDDEN if rate_limit_remaining == Some(0) => {
                Err(StarSweepError::RateLimitExceeded(
                    "API rate limit exhausted".to_string(),
                ))
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(StarSweepError::ApiError(
                    format!("API request failed with status {}: {}", status, error_text),
                ))
            }
        }
    }

    /// Fetch the identity behind the configured token. Failure here means
    /// the token is unusable and the run cannot proceed.
    pub async fn authenticated_user(&self) -> Result<GitHubUser> {
        let url = format!("{}/user", API_BASE_URL);
        let response = self.get_checked(&url).await?;
        let user: GitHubUser = response.json().await?;
        Ok(user)
    }

    pub async fn get_user(&self, login: &str) -> Result<GitHubUser> {
        let url = format!("{}/users/{}", API_BASE_URL, login);
        let response = self.get_checked(&url).await?;
        let user: GitHubUser = response.json().await?;
        Ok(user)
    }

    /// List a user's repositories sorted by creation time descending,
    /// returning at most `limit` records. Pages at up to 100 per request
    /// and stops as soon as the limit is reached.
    pub async fn list_recent_repos(&self, login: &str, limit: usize) -> Result<Vec<GitHubRepo>> {
        let per_page = scan_per_page(limit);
        let mut repos: Vec<GitHubRepo> = Vec::with_capacity(limit);

        for url in repo_page_urls(login, limit) {
            let response = self.get_checked(&url).await?;
            let batch: Vec<GitHubRepo> = response.json().await?;
            let last_page = batch.len() < per_page;

            repos.extend(batch);

            if repos.len() >= limit || last_page {
                break;
            }
        }

        repos.truncate(limit);
        Ok(repos)
    }

    /// Has the acting account already starred this repository? The starred
    /// endpoint answers 204 for yes and 404 for no.
    pub async fn is_starred_by_me(&self, full_name: &str) -> Result<bool> {
        let (owner, repo) = split_full_name(full_name)?;
        let url = format!("{}/user/starred/{}/{}", API_BASE_URL, owner, repo);

        let response = self.send(Method::GET, &url).await?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(StarSweepError::ApiError(
                    format!("Star lookup failed with status {}: {}", status, error_text),
                ))
            }
        }
    }

    /// Star a repository on behalf of the acting account.
    pub async fn star_repo(&self, full_name: &str) -> Result<()> {
        let (owner, repo) = split_full_name(full_name)?;
        let url = format!("{}/user/starred/{}/{}", API_BASE_URL, owner, repo);

        let response = self
            .client
            .put(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .header("Authorization", format!("token {}", self.token))
            .header("Content-Length", "0")
            .send()
            .await?;

        match response.status() {
            StatusCode::NO_CONTENT | StatusCode::NOT_MODIFIED => Ok(()),
            StatusCode::FORBIDDEN => {
                let error_text = response.text().await.unwrap_or_default();
                Err(StarSweepError::ApiError(format!("Starring forbidden: {}", error_text)))
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(StarSweepError::ApiError(
                    format!("Star request failed with status {}: {}", status, error_text),
                ))
            }
        }
    }

    /// Remaining core API quota.
    pub async fn rate_limit(&self) -> Result<RateLimit> {
        let url = format!("{}/rate_limit", API_BASE_URL);
        let response = self.get_checked(&url).await?;
        let rate: RateLimitResponse = response.json().await?;
        Ok(rate.resources.core)
    }
}

impl StarPlatform for GitHubClient {
    async fn resolve_user(&self, login: &str) -> Result<GitHubUser> {
        self.get_user(login).await
    }

    async fn recent_repos(&self, login: &str, limit: usize) -> Result<Vec<GitHubRepo>> {
        self.list_recent_repos(login, limit).await
    }

    async fn is_starred(&self, full_name: &str) -> Result<bool> {
        self.is_starred_by_me(full_name).await
    }

    async fn star(&self, full_name: &str) -> Result<()> {
        self.star_repo(full_name).await
    }
}

// The page size must stay constant across a scan: GitHub offsets each page
// by (page - 1) * per_page of the current request, so a shrinking per_page
// would re-fetch earlier records and skip later ones.
fn scan_per_page(limit: usize) -> usize {
    PER_PAGE.min(limit).max(1)
}

/// The page URLs a bounded scan of a user's repositories may need, in fetch
/// order. Short final pages end the scan early at the call site.
pub fn repo_page_urls(login: &str, limit: usize) -> Vec<String> {
    let per_page = scan_per_page(limit);
    let pages = limit.div_ceil(per_page);

    (1..=pages)
        .map(|page| {
            format!(
                "{}/users/{}/repos?sort=created&direction=desc&per_page={}&page={}",
                API_BASE_URL, login, per_page, page
            )
        })
        .collect()
}

fn split_full_name(full_name: &str) -> Result<(&str, &str)> {
    match full_name.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner, repo))
        }
        _ => Err(StarSweepError::InvalidRepoName(
            format!("Invalid repository name format: {}", full_name),
        )),
    }
}
