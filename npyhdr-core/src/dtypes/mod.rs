//! Module for the `descr` dtype string. Contains [ElementKind], [DtypeDescriptor]
//! and the [NumpyDtype] trait that maps rust element types onto them.
//!
//! A dtype string is `<endian><kind><width>`, for example `<f4` is a little
//! endian 4 byte float. See the [numpy documentation](https://numpy.org/doc/stable/reference/arrays.dtypes.html).

mod numpy_dtype;

pub use numpy_dtype::NumpyDtype;

use crate::{endian::Endian, error::HeaderError};
use std::{
    str::FromStr,
    string::{String, ToString},
};

/// The kind character of a dtype string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Unsigned,
    Signed,
    Float,
    Complex,
}

impl ElementKind {
    pub fn code(&self) -> char {
        match self {
            ElementKind::Unsigned => 'u',
            ElementKind::Signed => 'i',
            ElementKind::Float => 'f',
            ElementKind::Complex => 'c',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'u' => Some(ElementKind::Unsigned),
            'i' => Some(ElementKind::Signed),
            'f' => Some(ElementKind::Float),
            'c' => Some(ElementKind::Complex),
            _ => None,
        }
    }

    /// Whether `byte_width` is a width this kind can have.
    pub fn allows_width(&self, byte_width: usize) -> bool {
        match self {
            ElementKind::Complex => matches!(byte_width, 8 | 16),
            _ => matches!(byte_width, 1 | 2 | 4 | 8),
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Parsed form of a dtype string like `<f8`.
///
/// The width is always legal for the kind: 1, 2, 4 or 8 bytes for `u`, `i`
/// and `f`, 8 or 16 bytes for `c`. Note that `<c16` is four characters long.
/// The `|` marker only appears on 1 byte types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DtypeDescriptor {
    endian: Endian,
    kind: ElementKind,
    byte_width: usize,
}

impl DtypeDescriptor {
    pub fn new(endian: Endian, kind: ElementKind, byte_width: usize) -> Result<Self, HeaderError> {
        if !kind.allows_width(byte_width) {
            return Err(HeaderError::MalformedDtype {
                descr: format!("{endian}{kind}{byte_width}"),
                reason: "byte width not allowed for this kind",
            });
        }
        if endian == Endian::NotApplicable && byte_width > 1 {
            return Err(HeaderError::MalformedDtype {
                descr: format!("{endian}{kind}{byte_width}"),
                reason: "byte order marker | only applies to 1 byte types",
            });
        }
        Ok(Self {
            endian,
            kind,
            byte_width,
        })
    }

    /// Like [DtypeDescriptor::new], but a `|` descriptor that grows past 1
    /// byte becomes little endian.
    fn resized(&self, kind: ElementKind, byte_width: usize) -> Result<Self, HeaderError> {
        let endian = match self.endian {
            Endian::NotApplicable if byte_width > 1 => Endian::Little,
            endian => endian,
        };
        Self::new(endian, kind, byte_width)
    }

    /// Descriptor in the byte order of the running machine.
    ///
    /// Byte order is detected on every call rather than assumed.
    pub fn host(kind: ElementKind, byte_width: usize) -> Result<Self, HeaderError> {
        Self::new(Endian::host(), kind, byte_width)
    }

    /// Parses a dtype string such as `<f4`, `|u1` or `<c16`.
    pub fn parse(descr: &str) -> Result<Self, HeaderError> {
        let malformed = |reason| HeaderError::MalformedDtype {
            descr: descr.to_string(),
            reason,
        };

        let mut chars = descr.chars();
        let endian = chars
            .next()
            .ok_or_else(|| malformed("empty dtype"))
            .and_then(|c| Endian::from_char(c).ok_or_else(|| malformed("expected one of < > |")))?;
        let kind = chars
            .next()
            .and_then(ElementKind::from_code)
            .ok_or_else(|| malformed("expected one of u i f c"))?;

        let suffix = chars.as_str();
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("byte width is not a decimal number"));
        }
        let byte_width: usize = suffix
            .parse()
            .map_err(|_| malformed("byte width is not a decimal number"))?;

        Self::new(endian, kind, byte_width).map_err(|e| match e {
            HeaderError::MalformedDtype { reason, .. } => malformed(reason),
            e => e,
        })
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn byte_width(&self) -> usize {
        self.byte_width
    }

    pub fn is_little_endian(&self) -> bool {
        self.endian.is_little()
    }

    /// Same kind and byte order with half the width, e.g. `<f8` to `<f4`.
    pub fn narrow(&self) -> Result<Self, HeaderError> {
        self.resized(self.kind, self.byte_width / 2)
    }

    /// Same kind and byte order with twice the width, e.g. `<f4` to `<f8`.
    pub fn widen(&self) -> Result<Self, HeaderError> {
        self.resized(self.kind, self.byte_width * 2)
    }

    /// Same width and byte order with another kind, e.g. `<f4` to `<u4`.
    pub fn with_kind(&self, kind: ElementKind) -> Result<Self, HeaderError> {
        self.resized(kind, self.byte_width)
    }
}

impl std::fmt::Display for DtypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.endian, self.kind, self.byte_width)
    }
}

impl FromStr for DtypeDescriptor {
    type Err = HeaderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Dtype string for `kind` and `byte_width` in host byte order.
pub fn encode(kind: ElementKind, byte_width: usize) -> Result<String, HeaderError> {
    Ok(DtypeDescriptor::host(kind, byte_width)?.to_string())
}

/// Splits a dtype string into byte order, kind and width.
pub fn decode(descr: &str) -> Result<(Endian, ElementKind, usize), HeaderError> {
    let d = DtypeDescriptor::parse(descr)?;
    Ok((d.endian, d.kind, d.byte_width))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_marker() -> char {
        Endian::host().into()
    }

    #[test]
    fn test_encode_uses_host_endian() {
        let descr = encode(ElementKind::Float, 4).unwrap();
        assert_eq!(descr, format!("{}f4", host_marker()));
        let descr = encode(ElementKind::Unsigned, 1).unwrap();
        assert_eq!(descr, format!("{}u1", host_marker()));
        assert!(encode(ElementKind::Float, 3).is_err());
        assert!(encode(ElementKind::Complex, 4).is_err());
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("<f8"), Ok((Endian::Little, ElementKind::Float, 8)));
        assert_eq!(decode(">i2"), Ok((Endian::Big, ElementKind::Signed, 2)));
        assert_eq!(
            decode("|u1"),
            Ok((Endian::NotApplicable, ElementKind::Unsigned, 1))
        );
        assert_eq!(decode("<c8"), Ok((Endian::Little, ElementKind::Complex, 8)));
    }

    #[test]
    fn test_decode_two_digit_width() {
        let d = DtypeDescriptor::parse("<c16").unwrap();
        assert_eq!(d.kind(), ElementKind::Complex);
        assert_eq!(d.byte_width(), 16);
        assert_eq!(d.to_string(), "<c16");
        assert!(DtypeDescriptor::parse("<f16").is_err());
    }

    #[test]
    fn test_decode_malformed() {
        for bad in [
            "", "<", "f4", "=f4", "<x4", "<f", "<f3", "<u0", "<f 4", "<f+4", "<c4", "|f8", "|i4",
            "|c8",
        ] {
            match DtypeDescriptor::parse(bad) {
                Err(HeaderError::MalformedDtype { descr, .. }) => assert_eq!(descr, bad),
                other => panic!("{bad:?} parsed as {other:?}"),
            }
        }
    }

    #[test]
    fn test_narrow_widen_with_kind() {
        let f8: DtypeDescriptor = "<f8".parse().unwrap();
        assert_eq!(f8.narrow().unwrap().to_string(), "<f4");
        assert_eq!(f8.narrow().unwrap().widen().unwrap(), f8);
        assert_eq!(f8.with_kind(ElementKind::Unsigned).unwrap().to_string(), "<u8");
        assert!(f8.widen().is_err());

        let u1: DtypeDescriptor = "|u1".parse().unwrap();
        assert!(u1.narrow().is_err());
        assert_eq!(u1.widen().unwrap().to_string(), "<u2");
        assert_eq!(u1.with_kind(ElementKind::Signed).unwrap().to_string(), "|i1");

        let be: DtypeDescriptor = ">i2".parse().unwrap();
        assert_eq!(be.narrow().unwrap().to_string(), ">i1");
        assert_eq!(be.widen().unwrap().to_string(), ">i4");

        let c8: DtypeDescriptor = "<c8".parse().unwrap();
        assert_eq!(c8.widen().unwrap().to_string(), "<c16");
        assert!(c8.narrow().is_err());
        assert_eq!(c8.with_kind(ElementKind::Float).unwrap().to_string(), "<f8");
        assert!(f8.narrow().unwrap().with_kind(ElementKind::Complex).is_err());
    }
}
