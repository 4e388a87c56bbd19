use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Everything that can go wrong while walking a remote site's file tree.
///
/// Nothing here is recovered from locally; callers decide how to surface it.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("vfs request for `{path}` failed with status {status}")]
    Status { path: String, status: u16 },
    #[error("malformed vfs listing: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("path `{0}` does not contain the `home` root marker")]
    MissingRootMarker(String),
    #[error("invalid header value: {0}")]
    Header(#[from] InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
