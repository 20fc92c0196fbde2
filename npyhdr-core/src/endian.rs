//! Byte order markers and the little-endian header length field.

/// Byte order marker of a dtype string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
    /// `|`, used by NumPy for single byte types.
    NotApplicable,
}

impl Endian {
    /// Byte order of the machine we are running on.
    ///
    /// Looks at where the low byte of a `1u16` lands in memory.
    #[inline]
    pub fn host() -> Self {
        if 1u16.to_ne_bytes()[0] == 1 {
            Endian::Little
        } else {
            Endian::Big
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Endian::Little),
            '>' => Some(Endian::Big),
            '|' => Some(Endian::NotApplicable),
            _ => None,
        }
    }

    /// `|` has no byte order, so it reads the same as little endian.
    pub fn is_little(&self) -> bool {
        !matches!(self, Endian::Big)
    }
}

impl From<Endian> for char {
    fn from(endian: Endian) -> char {
        match endian {
            Endian::Little => '<',
            Endian::Big => '>',
            Endian::NotApplicable => '|',
        }
    }
}

impl std::fmt::Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// The two bytes of `value`, low byte first, whatever the host byte order.
pub fn to_little_endian_u16(value: u16) -> [u8; 2] {
    let ne = value.to_ne_bytes();
    match Endian::host() {
        Endian::Big => [ne[1], ne[0]],
        _ => ne,
    }
}

/// Assembles a length field from its unsigned bytes. Never sign extends.
#[inline]
pub fn from_little_endian_u16(lsb: u8, msb: u8) -> u16 {
    (msb as u16) << 8 | lsb as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_matches_target() {
        let expected = if cfg!(target_endian = "little") {
            Endian::Little
        } else {
            Endian::Big
        };
        assert_eq!(Endian::host(), expected);
    }

    #[test]
    fn test_to_little_endian_u16() {
        assert_eq!(to_little_endian_u16(0), [0, 0]);
        assert_eq!(to_little_endian_u16(0x76), [0x76, 0]);
        assert_eq!(to_little_endian_u16(300), [44, 1]);
        assert_eq!(to_little_endian_u16(u16::MAX), [255, 255]);
        for v in [0u16, 1, 127, 128, 255, 256, 4096, 40000, u16::MAX] {
            assert_eq!(to_little_endian_u16(v), v.to_le_bytes());
        }
    }

    #[test]
    fn test_from_little_endian_u16_is_unsigned() {
        assert_eq!(from_little_endian_u16(0x76, 0), 118);
        assert_eq!(from_little_endian_u16(0xf0, 0), 240);
        assert_eq!(from_little_endian_u16(0xff, 0xff), u16::MAX);
        for v in [0u16, 129, 300, 65535] {
            let [lsb, msb] = to_little_endian_u16(v);
            assert_eq!(from_little_endian_u16(lsb, msb), v);
        }
    }

    #[test]
    fn test_markers() {
        for e in [Endian::Little, Endian::Big, Endian::NotApplicable] {
            assert_eq!(Endian::from_char(char::from(e)), Some(e));
        }
        assert_eq!(Endian::from_char('='), None);
        assert!(Endian::NotApplicable.is_little());
        assert!(!Endian::Big.is_little());
    }
}
