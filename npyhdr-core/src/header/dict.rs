//! Scanning of the header dictionary text.
//!
//! This is not a python literal parser. It accepts exactly the layout
//! written by NumPy and by [Header::encode](super::Header::encode):
//!
//! ```text
//! {'descr': '<f4', 'fortran_order': False, 'shape': (10, 4), }
//! ```
//!
//! with the keys in that order.

use crate::{error::HeaderError, shapes::Shape};
use std::{string::String, vec::Vec};

/// Dims of the tuple between the first `(` and the first `)`.
///
/// Empty tokens are dropped, so both `(7,)` and `(10, 4, )` parse. Shapes
/// whose extents multiply past `usize` are [HeaderError::ShapeOverflow].
pub(crate) fn parse_shape(text: &str) -> Result<Shape, HeaderError> {
    let (open, close) = match (text.find('('), text.find(')')) {
        (Some(open), Some(close)) if open < close => (open, close),
        _ => {
            return Err(HeaderError::MalformedShape {
                text: text.into(),
                token: String::new(),
            })
        }
    };

    let tuple = &text[open + 1..close];
    let mut dims = Vec::new();
    for token in tuple.split(',') {
        let token = token.trim_matches(' ');
        if token.is_empty() {
            continue;
        }
        let extent = token
            .parse::<usize>()
            .map_err(|_| HeaderError::MalformedShape {
                text: tuple.into(),
                token: token.into(),
            })?;
        dims.push(extent);
    }

    let shape = Shape::from(dims);
    if !shape.is_addressable() {
        return Err(HeaderError::ShapeOverflow {
            dims: shape.into(),
        });
    }
    Ok(shape)
}

/// The `descr` string and the `fortran_order` flag, checking the keys appear
/// as `descr`, `fortran_order`, `shape`.
pub(crate) fn parse_dict(text: &str) -> Result<(&str, bool), HeaderError> {
    let mut scanner = DictScanner { text, pos: 0 };

    scanner.expect(b'{', "'{'")?;
    scanner.key("descr")?;
    let descr = scanner.quoted_value("quoted 'descr' value")?;

    scanner.key("fortran_order")?;
    let fortran_order = match scanner.bare_value() {
        "False" => false,
        "True" => true,
        found => {
            return Err(HeaderError::UnexpectedDictStructure {
                expected: "True or False",
                found: found.into(),
            })
        }
    };

    scanner.key("shape")?;
    Ok((descr, fortran_order))
}

struct DictScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> DictScanner<'a> {
    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn unexpected(&self, expected: &'static str) -> HeaderError {
        HeaderError::UnexpectedDictStructure {
            expected,
            found: self.rest().into(),
        }
    }

    fn skip_while(&mut self, f: impl Fn(u8) -> bool) {
        while self.pos < self.text.len() && f(self.text.as_bytes()[self.pos]) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, c: u8, expected: &'static str) -> Result<(), HeaderError> {
        self.skip_while(|b| b == b' ');
        if self.text.as_bytes().get(self.pos) != Some(&c) {
            return Err(self.unexpected(expected));
        }
        self.pos += 1;
        Ok(())
    }

    /// A single quoted token, without the quotes.
    fn quoted(&mut self, expected: &'static str) -> Result<&'a str, HeaderError> {
        self.expect(b'\'', expected)?;
        let len = self.rest().find('\'').ok_or_else(|| self.unexpected(expected))?;
        let token = &self.rest()[..len];
        self.pos += len + 1;
        Ok(token)
    }

    /// `'name':`, after skipping the separator from the previous entry.
    fn key(&mut self, name: &'static str) -> Result<(), HeaderError> {
        self.skip_while(|b| b == b' ' || b == b',');
        let start = self.pos;
        let found = self.quoted(name)?;
        if found != name {
            self.pos = start;
            return Err(self.unexpected(name));
        }
        self.expect(b':', "':'")
    }

    fn quoted_value(&mut self, expected: &'static str) -> Result<&'a str, HeaderError> {
        self.quoted(expected)
    }

    /// An unquoted value running up to the next `,` or `}`.
    fn bare_value(&mut self) -> &'a str {
        self.skip_while(|b| b == b' ');
        let rest = self.rest();
        let len = rest.find(|c: char| c == ',' || c == '}').unwrap_or(rest.len());
        self.pos += len;
        rest[..len].trim_end_matches(' ')
    }
}
