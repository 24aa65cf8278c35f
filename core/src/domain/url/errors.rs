use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    #[error("Malformed percent-escape sequence at byte {position}")]
    MalformedEscape { position: usize },

    #[error("Decoded value is not valid UTF-8")]
    InvalidUtf8,
}
