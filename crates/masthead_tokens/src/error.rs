use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain a token graph from its source
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read token document {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported token document {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("token request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[cfg(feature = "fetch")]
    #[error("token request failed: {0}")]
    Http(#[from] reqwest::Error),
}
