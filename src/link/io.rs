//! embedded_io wrapper over the link transport
//!
//! Lets higher firmware layers use `write_all`/`write_fmt` for status
//! text instead of looping over `output_byte` by hand.

use embedded_io::{ErrorType, Write};

use crate::link::traits::LinkTransport;

/// Error type for link I/O operations.
///
/// The byte-level transport methods are infallible by contract, so this
/// is never produced by `LinkWriter` itself; it exists to satisfy the
/// `embedded_io` error plumbing.
#[derive(Debug, Clone, Copy)]
pub struct LinkIoError;

impl embedded_io::Error for LinkIoError {
    fn kind(&self) -> embedded_io::ErrorKind {
        embedded_io::ErrorKind::Other
    }
}

/// Borrowing writer over a transport.
pub struct LinkWriter<'a, T: LinkTransport> {
    transport: &'a mut T,
}

impl<'a, T: LinkTransport> LinkWriter<'a, T> {
    pub fn new(transport: &'a mut T) -> Self {
        Self { transport }
    }
}

impl<'a, T: LinkTransport> ErrorType for LinkWriter<'a, T> {
    type Error = LinkIoError;
}

impl<'a, T: LinkTransport> Write for LinkWriter<'a, T> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        for &byte in buf {
            self.transport.output_byte(byte);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
