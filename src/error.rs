use thiserror::Error;

/// Errors reported while decoding bencode data.
///
/// Every error is terminal: a failure at any nesting depth aborts the whole
/// decode and no partially-built value is ever returned.
#[derive(Debug, Error)]
pub enum BencodeError {
    #[error("invalid integer")]
    InvalidInteger,

    #[error("invalid string")]
    InvalidString,

    #[error("invalid list")]
    InvalidList,

    #[error("invalid dictionary")]
    InvalidDict,

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("nesting too deep")]
    NestingTooDeep,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
