use crate::lat_lng::RangeError;

/// Encapsulates all errors that can occur in this crate.
#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Return the `ErrorKind` for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Return the `ErrorKind` for this error and consume the error.
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Return true if this error was caused by a value failing the
    /// numeric range check.
    pub fn is_range(&self) -> bool {
        match self.kind() {
            ErrorKind::Range { .. } => true,
            _ => false,
        }
    }

    /// Return the `RangeError` encapsulated by this error, if this
    /// error was caused by an out-of-range value.
    pub fn into_range(self) -> Option<RangeError> {
        match self.kind {
            ErrorKind::Range { err } => Some(err),
            _ => None,
        }
    }

    pub(crate) fn new(kind: ErrorKind) -> Self {
        Error { kind }
    }

    pub(crate) fn coordinate<M>(msg: M) -> Self
    where
        M: Into<String>,
    {
        Error::new(ErrorKind::Coordinate { msg: msg.into() })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            ErrorKind::Coordinate { msg } => {
                write!(f, "value is not a valid coordinate: {}", msg)
            }
            ErrorKind::Range { err } => write!(f, "{}", err),
        }
    }
}

/// Describes the kinds of errors that can occur in this crate.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    /// The input did not have the shape of a coordinate. The message
    /// describes which shape check failed.
    Coordinate { msg: String },
    /// A component value failed the numeric range check.
    Range { err: RangeError },
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Coordinate { .. } => None,
            ErrorKind::Range { err } => Some(err),
        }
    }
}

impl From<RangeError> for Error {
    fn from(error: RangeError) -> Self {
        Error::new(ErrorKind::Range { err: error })
    }
}
