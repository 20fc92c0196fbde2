//! Reading and writing `.npy` files. See [read_header()], [write()], [save()]
//! and [load_header()].
//!
//! The payload is handled as raw bytes in the order and byte order the header
//! describes; interpreting it is up to the caller.

mod load;
#[cfg(feature = "mmap")]
mod mmap;
mod save;

pub use load::*;
#[cfg(feature = "mmap")]
pub use mmap::NpyFile;
pub use save::*;

use npyhdr_core::error::HeaderError;

#[derive(Debug)]
pub enum NpyError {
    /// The header bytes could not be decoded or encoded.
    Header(HeaderError),

    /// Error from opening a file, reading values, etc.
    Io(std::io::Error),

    /// The payload does not hold the number of bytes the header describes.
    PayloadLength { expected: usize, found: usize },
}

impl std::fmt::Display for NpyError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            NpyError::Header(err) => write!(fmt, "{err}"),
            NpyError::Io(err) => write!(fmt, "{err}"),
            NpyError::PayloadLength { expected, found } => write!(
                fmt,
                "payload length mismatch: header describes {expected} bytes, found {found}"
            ),
        }
    }
}

impl std::error::Error for NpyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NpyError::Header(err) => Some(err),
            NpyError::Io(err) => Some(err),
            NpyError::PayloadLength { .. } => None,
        }
    }
}

impl From<HeaderError> for NpyError {
    fn from(e: HeaderError) -> Self {
        Self::Header(e)
    }
}

impl From<std::io::Error> for NpyError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

fn check_payload_len(expected: usize, found: usize) -> Result<(), NpyError> {
    if expected != found {
        return Err(NpyError::PayloadLength { expected, found });
    }
    Ok(())
}
