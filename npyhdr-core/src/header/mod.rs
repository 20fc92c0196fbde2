//! Encoding and decoding of the [.npy](https://numpy.org/devdocs/reference/generated/numpy.lib.format.html)
//! header. See [Header::encode()] and [Header::decode()].
//!
//! The layout is:
//!
//! | offset | bytes | content |
//! | --- | --- | --- |
//! | 0 | 6 | `\x93NUMPY` |
//! | 6 | 2 | version, always 1.0 |
//! | 8 | 2 | header length, unsigned little endian |
//! | 10 | header length | dict text, space padding, `\n` |
//!
//! The header length is chosen so that `header length + 10` is a multiple
//! of 16. Raw array bytes follow the header.

mod dict;

use crate::{
    dtypes::{DtypeDescriptor, ElementKind, NumpyDtype},
    endian::{from_little_endian_u16, to_little_endian_u16},
    error::HeaderError,
    shapes::Shape,
};
use std::{
    string::{String, ToString},
    vec::Vec,
};

pub const MAGIC_NUMBER: &[u8] = b"\x93NUMPY";
pub const VERSION: &[u8] = &[1, 0];

/// Magic number plus version.
pub const PREAMBLE_LEN: usize = 8;
/// Preamble plus the 2 byte length field; always present before the dict.
pub const PREFIX_LEN: usize = 10;
pub const ALIGNMENT: usize = 16;

/// Extra padding NumPy adds beyond the minimum.
pub const NUMPY_COMPAT_PADDING: usize = 3 * ALIGNMENT;

/// Only row-major arrays are written or accepted.
pub const FORTRAN_ORDER: bool = false;

/// How much space padding goes after the dict text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Padding {
    /// Just enough to reach the next 16 byte boundary. Matches older NumPy.
    Minimal,
    /// The minimum plus [NUMPY_COMPAT_PADDING] bytes. Matches the header
    /// current NumPy writes for small arrays byte for byte.
    #[default]
    NumpyCompat,
}

/// Options for [Header::encode_with()].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HeaderOptions {
    pub padding: Padding,
}

impl HeaderOptions {
    pub fn minimal() -> Self {
        Self {
            padding: Padding::Minimal,
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}

/// Metadata stored in a `.npy` header.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Header {
    pub descr: DtypeDescriptor,
    pub shape: Shape,
}

impl Header {
    pub fn new(descr: DtypeDescriptor, shape: impl Into<Shape>) -> Self {
        Self {
            descr,
            shape: shape.into(),
        }
    }

    /// Header for an array of `E` in host byte order.
    pub fn for_type<E: NumpyDtype>(shape: impl Into<Shape>) -> Self {
        Self::new(E::dtype(), shape)
    }

    pub fn dtype_string(&self) -> String {
        self.descr.to_string()
    }

    pub fn kind(&self) -> ElementKind {
        self.descr.kind()
    }

    pub fn byte_width(&self) -> usize {
        self.descr.byte_width()
    }

    /// Number of raw bytes that follow the header. Saturates at [usize::MAX]
    /// for shapes too large to address.
    pub fn payload_len(&self) -> usize {
        self.shape
            .dims()
            .iter()
            .try_fold(self.descr.byte_width(), |acc, &d| acc.checked_mul(d))
            .unwrap_or(usize::MAX)
    }

    /// `{'descr': '<f4', 'fortran_order': False, 'shape': (10, 4), }`
    pub fn dict_text(&self) -> String {
        format!(
            "{{'descr': '{}', 'fortran_order': {}, 'shape': {}, }}",
            self.descr,
            if FORTRAN_ORDER { "True" } else { "False" },
            self.shape.to_tuple_text(false),
        )
    }

    /// `{"descr": "<f4", "fortran_order": false, "shape": [10, 4]}`
    ///
    /// Only written, never parsed back.
    pub fn json_text(&self) -> String {
        format!(
            "{{\"descr\": \"{}\", \"fortran_order\": {}, \"shape\": {}}}",
            self.descr,
            FORTRAN_ORDER,
            self.shape.to_tuple_text(true),
        )
    }

    /// Encodes with [Padding::NumpyCompat].
    pub fn encode(&self) -> Result<Vec<u8>, HeaderError> {
        self.encode_with(&HeaderOptions::default())
    }

    pub fn encode_with(&self, options: &HeaderOptions) -> Result<Vec<u8>, HeaderError> {
        let dict = self.dict_text();
        let dict_len = dict.len();

        // the trailing newline counts towards the alignment
        let mut padding = ALIGNMENT - 1 - (PREFIX_LEN + dict_len) % ALIGNMENT;
        if options.padding == Padding::NumpyCompat {
            padding += NUMPY_COMPAT_PADDING;
        }
        let header_len = dict_len + padding + 1;
        debug_assert_eq!((header_len + PREFIX_LEN) % ALIGNMENT, 0);

        let len_field = u16::try_from(header_len)
            .map_err(|_| HeaderError::HeaderOverflow { len: header_len })?;

        tracing::debug!(
            descr = %self.descr,
            shape = %self.shape,
            dict_len,
            padding,
            header_len,
            "encoding npy header"
        );

        let mut bytes = Vec::with_capacity(PREFIX_LEN + header_len);
        bytes.extend_from_slice(MAGIC_NUMBER);
        bytes.extend_from_slice(VERSION);
        bytes.extend_from_slice(&to_little_endian_u16(len_field));
        bytes.extend_from_slice(dict.as_bytes());
        bytes.resize(bytes.len() + padding, b'\x20');
        bytes.push(b'\n');
        Ok(bytes)
    }

    /// Decodes a buffer holding exactly one header and nothing else.
    ///
    /// Only row-major, little endian (or byte order free) arrays are accepted.
    pub fn decode(bytes: &[u8]) -> Result<Self, HeaderError> {
        let header_len = header_len(bytes)?;
        let available = bytes.len() - PREFIX_LEN;
        if available != header_len {
            return Err(HeaderError::TruncatedHeader {
                header_len,
                available,
                reason: if available < header_len {
                    "buffer shorter than declared header length"
                } else {
                    "bytes after the declared header length"
                },
            });
        }
        decode_dict(bytes)
    }

    /// Decodes a header at the start of `bytes`, which may continue with the
    /// array payload. Returns the header and the offset of the payload.
    pub fn decode_prefix(bytes: &[u8]) -> Result<(Self, usize), HeaderError> {
        let header_len = header_len(bytes)?;
        let available = bytes.len() - PREFIX_LEN;
        if available < header_len {
            return Err(HeaderError::TruncatedHeader {
                header_len,
                available,
                reason: "buffer shorter than declared header length",
            });
        }
        let end = PREFIX_LEN + header_len;
        Ok((decode_dict(&bytes[..end])?, end))
    }
}

/// Checks the 10 byte prefix and returns the declared header length, the
/// number of bytes that follow the prefix.
pub fn header_len(bytes: &[u8]) -> Result<usize, HeaderError> {
    let n = bytes.len().min(PREAMBLE_LEN);
    let preamble = [MAGIC_NUMBER, VERSION].concat();
    if bytes[..n] != preamble[..n] {
        return Err(HeaderError::BadMagic {
            found: bytes[..n].to_vec(),
        });
    }
    if bytes.len() < PREFIX_LEN {
        return Err(HeaderError::TruncatedHeader {
            header_len: 0,
            available: bytes.len(),
            reason: "buffer shorter than the 10 byte prefix",
        });
    }

    let header_len = from_little_endian_u16(bytes[8], bytes[9]) as usize;
    if header_len == 0 {
        return Err(HeaderError::TruncatedHeader {
            header_len,
            available: bytes.len() - PREFIX_LEN,
            reason: "empty header",
        });
    }
    if (header_len + PREFIX_LEN) % ALIGNMENT != 0 {
        return Err(HeaderError::TruncatedHeader {
            header_len,
            available: bytes.len() - PREFIX_LEN,
            reason: "header length not aligned to 16 bytes",
        });
    }
    Ok(header_len)
}

/// Parses `bytes[PREFIX_LEN..]`, the dict region of an already validated prefix.
fn decode_dict(bytes: &[u8]) -> Result<Header, HeaderError> {
    tracing::trace!("npy header\n{}", xxdisplay(bytes, 16, '.'));

    let region = &bytes[PREFIX_LEN..];
    let last = region.last().copied();
    if last != Some(b'\n') {
        return Err(HeaderError::MissingTerminator { last });
    }
    let text = &region[..region.len() - 1];
    let text = match std::str::from_utf8(text) {
        Ok(text) if text.is_ascii() => text,
        _ => {
            return Err(HeaderError::UnexpectedDictStructure {
                expected: "ASCII dict text",
                found: String::from_utf8_lossy(text).into_owned(),
            })
        }
    };

    let shape = dict::parse_shape(text)?;
    let (descr_str, fortran_order) = dict::parse_dict(text)?;
    let descr = DtypeDescriptor::parse(descr_str)?;

    if fortran_order != FORTRAN_ORDER || !descr.is_little_endian() {
        return Err(HeaderError::UnsupportedLayout {
            fortran_order,
            descr: descr_str.to_string(),
        });
    }

    tracing::debug!(
        header_len = region.len(),
        descr = %descr,
        shape = %shape,
        "decoded npy header"
    );
    Ok(Header { descr, shape })
}

/// Header bytes for `shape` and the dtype string `descr`, with
/// [Padding::NumpyCompat].
pub fn encode(shape: &Shape, descr: &str) -> Result<Vec<u8>, HeaderError> {
    Header::new(DtypeDescriptor::parse(descr)?, shape.clone()).encode()
}

/// Shape, dtype string, element kind and byte width from header bytes.
pub fn decode(bytes: &[u8]) -> Result<(Shape, String, ElementKind, usize), HeaderError> {
    let header = Header::decode(bytes)?;
    let descr = header.dtype_string();
    let kind = header.kind();
    let byte_width = header.byte_width();
    Ok((header.shape, descr, kind, byte_width))
}

/// Printable ASCII view of `bytes`, `width` characters per line, with
/// anything else shown as `non_printable`.
pub fn xxdisplay(bytes: &[u8], width: usize, non_printable: char) -> String {
    let mut out = String::with_capacity(bytes.len() + bytes.len() / width.max(1));
    for (i, &b) in bytes.iter().enumerate() {
        out.push(if (b' '..=b'~').contains(&b) {
            b as char
        } else {
            non_printable
        });
        if width > 0 && (i + 1) % width == 0 {
            out.push('\n');
        }
    }
    out
}
