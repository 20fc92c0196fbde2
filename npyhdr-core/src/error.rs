use std::{string::String, vec::Vec};

/// Everything that can go wrong while building or parsing a `.npy` header.
///
/// Each variant carries the offending value so a caller scanning many files
/// can log and skip a bad one.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// The dtype string (the `descr` value) is not `<endian><kind><width>`.
    MalformedDtype { descr: String, reason: &'static str },

    /// A fixed coordinate followed an unfixed one, or too many coordinates were given.
    InvalidCoordinatePrefix { prefix: Vec<isize> },

    /// A reshape would change the number of elements.
    IncompatibleReshape { from: Vec<usize>, to: Vec<isize> },

    /// The first 8 bytes are not `\x93NUMPY` followed by version 1.0.
    BadMagic { found: Vec<u8> },

    /// The declared header length does not fit the buffer or the 16 byte alignment.
    TruncatedHeader {
        header_len: usize,
        available: usize,
        reason: &'static str,
    },

    /// The dictionary region does not end with `\n`.
    MissingTerminator { last: Option<u8> },

    /// The `shape` tuple could not be parsed.
    MalformedShape { text: String, token: String },

    /// The dictionary keys are not `descr`, `fortran_order`, `shape` in that order.
    UnexpectedDictStructure { expected: &'static str, found: String },

    /// Column-major or big-endian payloads.
    UnsupportedLayout { fortran_order: bool, descr: String },

    /// The encoded header does not fit the 16 bit length field.
    HeaderOverflow { len: usize },

    /// The product of the shape's extents does not fit in a `usize`.
    ShapeOverflow { dims: Vec<usize> },
}

impl std::fmt::Display for HeaderError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            HeaderError::MalformedDtype { descr, reason } => {
                write!(fmt, "malformed dtype {descr:?}: {reason}")
            }
            HeaderError::InvalidCoordinatePrefix { prefix } => {
                write!(fmt, "invalid coordinate prefix {prefix:?}")
            }
            HeaderError::IncompatibleReshape { from, to } => write!(
                fmt,
                "cannot reshape {from:?} into {to:?}: number of elements must stay the same"
            ),
            HeaderError::BadMagic { found } => write!(fmt, "invalid magic number: {found:?}"),
            HeaderError::TruncatedHeader {
                header_len,
                available,
                reason,
            } => write!(
                fmt,
                "bad header length {header_len} ({available} bytes available): {reason}"
            ),
            HeaderError::MissingTerminator { last } => {
                write!(fmt, "header not terminated by newline, last byte {last:?}")
            }
            HeaderError::MalformedShape { text, token } => {
                write!(fmt, "malformed shape {text:?}: bad token {token:?}")
            }
            HeaderError::UnexpectedDictStructure { expected, found } => write!(
                fmt,
                "error while parsing header dict: expected {expected} found {found:?}"
            ),
            HeaderError::UnsupportedLayout {
                fortran_order,
                descr,
            } => write!(
                fmt,
                "unsupported layout: fortran_order={fortran_order} descr={descr:?}"
            ),
            HeaderError::HeaderOverflow { len } => {
                write!(fmt, "header length {len} does not fit in 16 bits")
            }
            HeaderError::ShapeOverflow { dims } => {
                write!(fmt, "element count of shape {dims:?} does not fit in usize")
            }
        }
    }
}

impl std::error::Error for HeaderError {}
