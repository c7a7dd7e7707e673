//! Error types

use core::fmt;

/// Enum to hold various error types
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum RawlineError {
    /// Input ended before the line was terminated
    Aborted,
    ReadError(embedded_io::ErrorKind),
    WriteError(embedded_io::ErrorKind),
}

impl embedded_io::Error for RawlineError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match *self {
            RawlineError::Aborted => embedded_io::ErrorKind::Interrupted,
            RawlineError::ReadError(kind) | RawlineError::WriteError(kind) => kind,
        }
    }
}

impl fmt::Display for RawlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawlineError::Aborted => write!(f, "input closed before end of line"),
            RawlineError::ReadError(kind) => write!(f, "read failed: {:?}", kind),
            RawlineError::WriteError(kind) => write!(f, "write failed: {:?}", kind),
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for RawlineError {}
