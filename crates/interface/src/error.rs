use thiserror::Error;

/// Local request errors. These signal a defect or bad input in the calling
/// layer and never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),
}

/// Provider failures, classified into a closed set at the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("translation request timed out")]
    Timeout,
    #[error("could not reach translation service: {0}")]
    Network(String),
    #[error("unsupported language pair: {0} -> {1}")]
    UnsupportedPair(String, String),
    #[error("malformed response from translation service: {0}")]
    MalformedResponse(String),
    #[error("translation service error: {0}")]
    Provider(String),
}
