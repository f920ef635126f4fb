use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarSweepError {
    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("Invalid repository name: {0}")]
    InvalidRepoName(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("No personal access token provided. Set USER_TOKEN or pass --token")]
    MissingToken,

    #[error("Target user list is empty. Set TARGET_USERS or provide a targets file")]
    NoTargets,
}

pub type Result<T> = std::result::Result<T, StarSweepError>;
