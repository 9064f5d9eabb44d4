//! # Errors

use std::fmt;

/// Error type used throughout the editor in place of panics.
#[derive(Debug)]
pub enum Error {
    /// Wrapper around `std::io::Error`.
    Io(std::io::Error),
    /// The window size obtained through a system call (or its escape-sequence
    /// fallback) could not be parsed into a valid `(rows, cols)` pair.
    InvalidWindowSize,
    /// Failed to obtain or parse the cursor position report used as a window-size
    /// fallback.
    CursorPosition,
    /// Too many arguments given on the command line. The attribute is the total
    /// number of command line arguments received.
    TooManyArguments(usize),
    /// Unrecognized option given as a command line argument.
    UnrecognizedOption(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::InvalidWindowSize => write!(f, "could not determine the terminal window size"),
            Self::CursorPosition => write!(f, "could not read the cursor position"),
            Self::TooManyArguments(n) => write!(f, "too many arguments ({n})"),
            Self::UnrecognizedOption(opt) => write!(f, "unrecognized option: {opt}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    /// Convert an IO Error into an editor `Error`.
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_displays_inner_message() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn source_is_only_set_for_io() {
        let err = Error::InvalidWindowSize;
        assert!(std::error::Error::source(&err).is_none());
        let err: Error = std::io::Error::new(std::io::ErrorKind::Other, "x").into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
