use std::io;

use thiserror::Error;

/// The reason a request could not be parsed.
///
/// Every malformed-input condition maps to exactly one kind. Waiting for more
/// input is not an error and has no kind, see [`Outcome::NeedMoreData`][crate::Outcome].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[error("invalid request line")]
    InvalidRequestLine,

    #[error("unsupported http version, only HTTP/1.1 is supported")]
    UnsupportedVersion,

    #[error("invalid headers")]
    InvalidHeaders,

    /// The request line or the header block is over its cap in [`Config`][crate::Config].
    #[error("headers too large")]
    HeadersTooLarge,

    #[error("incomplete request")]
    IncompleteRequest,

    #[error("failed to read from source")]
    SourceRead,
}

/// Error from reading a request off a byte source.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Parse(#[from] ErrorKind),

    #[error("io: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// The kind of this error. Read failures from the source are [`ErrorKind::SourceRead`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(kind) => *kind,
            Error::Io(_) => ErrorKind::SourceRead,
        }
    }
}

pub(crate) type Result<T, E = ErrorKind> = std::result::Result<T, E>;
