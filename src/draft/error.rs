#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("index {index} is out of range for a list of {len} entries")]
    OutOfRange { index: usize, len: usize },
    #[error("option {0} is not a valid choice")]
    InvalidOption(u8),
    #[error("text is {len} characters; the limit is {limit}")]
    LengthExceeded { len: usize, limit: usize },
}
