/// Failures while loading whitelist configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Client-input validation failures raised while parsing a meta header.
///
/// These are not system faults: the host is expected to map them to a
/// client-facing error response (HTTP 400-class). The whitelist variants
/// carry the accepted tokens, comma-joined, so the message tells the client
/// what would have been valid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetaError {
    #[error("Platform is not supported, should be: {allowed}")]
    UnsupportedPlatform { allowed: String },
    #[error("Environment is not supported, should be: {allowed}")]
    UnsupportedEnvironment { allowed: String },
    #[error("Missing version")]
    MissingVersion,
    #[error("Missing device os version")]
    MissingDeviceOsVersion,
    #[error("Missing device")]
    MissingDevice,
}
