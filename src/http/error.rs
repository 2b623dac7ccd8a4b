//! Classification of upstream HTTP failures.

use reqwest::StatusCode;

/// Why an upstream API answered with a non-success status.
#[derive(Debug, PartialEq)]
pub enum UpstreamError {
    /// Rate limit exceeded (HTTP 403 with rate limit message or 429)
    RateLimited(String),
    /// Authentication failed (HTTP 401)
    Unauthorized(String),
    /// Forbidden access (HTTP 403 non-rate-limit)
    Forbidden(String),
    /// Resource not found (HTTP 404)
    NotFound(String),
    /// Any other non-success status
    Status(u16),
}

impl std::fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpstreamError::RateLimited(msg) => {
                write!(
                    f,
                    "Rate limit exceeded: {}. Set GITHUB_TOKEN to raise the limit.",
                    msg
                )
            }
            UpstreamError::Unauthorized(msg) => {
                write!(f, "Authentication failed: {}. Check your GITHUB_TOKEN.", msg)
            }
            UpstreamError::Forbidden(msg) => write!(f, "Access forbidden: {}", msg),
            UpstreamError::NotFound(msg) => write!(f, "Not found: {}", msg),
            UpstreamError::Status(code) => write!(f, "Upstream answered HTTP {}", code),
        }
    }
}

impl std::error::Error for UpstreamError {}

/// Maps a response status and body excerpt to an [`UpstreamError`].
pub fn classify_status(status: StatusCode, body: &str) -> UpstreamError {
    match status {
        StatusCode::UNAUTHORIZED => {
            UpstreamError::Unauthorized("Invalid or missing authentication token".to_string())
        }
        StatusCode::FORBIDDEN => {
            if body.contains("rate limit") {
                UpstreamError::RateLimited("GitHub API rate limit exceeded".to_string())
            } else {
                UpstreamError::Forbidden("Access to this resource is forbidden".to_string())
            }
        }
        StatusCode::TOO_MANY_REQUESTS => UpstreamError::RateLimited("Too many requests".to_string()),
        StatusCode::NOT_FOUND => {
            UpstreamError::NotFound("The requested resource was not found".to_string())
        }
        s => UpstreamError::Status(s.as_u16()),
    }
}
