pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("negative index is not supported: {0}")]
    InvalidArgument(isize),
    #[error(transparent)]
    OutOfRange(OutOfRange),
    #[error("value is not in linked list")]
    NotFound,
}

/// Why a non-negative index had no node behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OutOfRange {
    #[error("index out of range: {0}")]
    Index(usize),
    #[error("pop from empty linked list")]
    PopFromEmpty,
}

impl From<OutOfRange> for Error {
    fn from(value: OutOfRange) -> Self {
        Error::OutOfRange(value)
    }
}
