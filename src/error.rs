use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("digest algorithm not supported: {name:?}")]
    UnsupportedAlgorithm { name: String },

    #[error("invalid filter parameters: {0}")]
    InvalidParameters(String),
}
