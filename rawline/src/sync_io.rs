//! IO wrapper pairing a byte source with an output sink
use crate::error::RawlineError;

/// Byte source and output sink for the editor.
///
/// Reads are expected to block until at least one byte is available.
/// A zero-length read means the source is closed.
pub struct IO<R, W>
where
    R: embedded_io::Read,
    W: embedded_io::Write,
{
    input: R,
    output: W,
}

impl<R, W> IO<R, W>
where
    R: embedded_io::Read,
    W: embedded_io::Write,
{
    /// Create IO wrapper from input and output
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume wrapper and return input and output as tuple
    pub fn take(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Read exactly one byte
    pub fn read_byte(&mut self) -> Result<u8, RawlineError> {
        let mut buf = [0u8; 1];

        let len = self
            .input
            .read(&mut buf)
            .map_err(|e| RawlineError::ReadError(embedded_io::Error::kind(&e)))?;

        if len == 0 {
            return Err(RawlineError::Aborted);
        }

        Ok(buf[0])
    }

    pub fn write(&mut self, buf: &[u8]) -> Result<(), RawlineError> {
        self.output
            .write_all(buf)
            .map_err(|e| RawlineError::WriteError(embedded_io::Error::kind(&e)))
    }

    pub fn flush(&mut self) -> Result<(), RawlineError> {
        self.output
            .flush()
            .map_err(|e| RawlineError::WriteError(embedded_io::Error::kind(&e)))
    }
}

#[cfg(any(test, feature = "std"))]
pub mod std_sync {
    //! IO implementation for `std`. Requires feature `std`.
    use super::*;
    use std::io::{Read, Stdin, Stdout, Write};

    impl Default for IO<StdinWrapper, StdoutWrapper> {
        fn default() -> Self {
            Self::new(StdinWrapper::new(), StdoutWrapper::new())
        }
    }

    /// Wrapper for [`std::io::Stdin`]
    pub struct StdinWrapper(Stdin);

    impl StdinWrapper {
        pub fn new() -> Self {
            Self(std::io::stdin())
        }
    }

    impl Default for StdinWrapper {
        fn default() -> Self {
            Self::new()
        }
    }

    impl embedded_io::ErrorType for StdinWrapper {
        type Error = embedded_io::ErrorKind;
    }

    impl embedded_io::Read for StdinWrapper {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            self.0.read(buf).map_err(|e| e.kind().into())
        }
    }

    /// Wrapper for [`std::io::Stdout`]
    pub struct StdoutWrapper(Stdout);

    impl StdoutWrapper {
        pub fn new() -> Self {
            Self(std::io::stdout())
        }
    }

    impl Default for StdoutWrapper {
        fn default() -> Self {
            Self::new()
        }
    }

    impl embedded_io::ErrorType for StdoutWrapper {
        type Error = embedded_io::ErrorKind;
    }

    impl embedded_io::Write for StdoutWrapper {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.0.write(buf).map_err(|e| e.kind().into())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.0.flush().map_err(|e| e.kind().into())
        }
    }
}
