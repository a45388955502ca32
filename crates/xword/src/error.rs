/// Failures at the word-service boundary
#[derive(thiserror::Error, Debug, Clone, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
