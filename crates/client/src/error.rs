use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Everything that can go wrong between a company identifier and its
/// assembled scope record.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The HTTP client itself could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    Setup(#[source] reqwest::Error),

    /// The request never produced an HTTP response (DNS, connect, or a
    /// broken body stream).
    #[error("Request to the registry failed for company {lei}")]
    Transport {
        lei: String,
        #[source]
        source: reqwest::Error,
    },

    /// The registry answered with a non-success status. The status is
    /// surfaced as-is; lookups are never retried here.
    #[error("Registry returned HTTP {status} for company {lei}")]
    Fetch { lei: String, status: u16 },

    /// The response body does not have the documented history shape, or a
    /// reported field is too corrupt to classify.
    #[error("Malformed history payload: {0}")]
    DataShape(String),

    /// A required environment variable is unset or blank.
    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),
}
