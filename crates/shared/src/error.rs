use thiserror::Error;

// One fetch attempt fails as a whole; callers keep whatever page and
// selection state they already had.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed catalog response: {0}")]
    Parse(String),
}
