use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("invalid unmatched-term policy '{0}': expected 'drop' or 'bucket-as-other'")]
    InvalidPolicy(String),
}
