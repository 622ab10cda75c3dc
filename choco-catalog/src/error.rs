use thiserror::Error;

/// Why the catalog could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not read response body: {0}")]
    Body(String),
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Invalid page configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown container profile `{0}` (expected `storefront` or `catalog`)")]
    UnknownProfile(String),
}
