use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing or empty report text")]
    MissingText,

    #[error("invalid level '{0}': expected 'standard' or 'child'")]
    InvalidLevel(String),

    #[error("report text is {len} bytes, limit is {max}")]
    InputTooLarge { len: usize, max: usize },
}
