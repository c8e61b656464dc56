use thiserror::Error;

/// Everything that can go wrong when converting, parsing or destructuring
/// sample values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0} is outside the seven named weekdays (0..=127)")]
    InvalidBits(i64),

    #[error("no weekday named {0:?}")]
    UnknownDay(String),

    #[error("no range bound named {0:?}")]
    UnknownBound(String),

    #[error("{0} is not a range bound")]
    BoundOutOfRange(i64),

    #[error("a {0} is not a container")]
    NotAContainer(&'static str),

    #[error("expected {expected} elements, found {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("unknown command {0:?}, try `help`")]
    UnknownCommand(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("{0:?} is neither `true` nor `false`")]
    InvalidFlag(String),
}

/// A `T` or an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
