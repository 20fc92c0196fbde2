//! Reading headers from a [Read] or a file.

use super::NpyError;
use npyhdr_core::header::{self, Header, PREFIX_LEN};
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

/// Reads the header of the `.npy` file at `path`. This calls [read_header()].
///
/// The payload is not read.
pub fn load_header<P: AsRef<Path>>(path: P) -> Result<Header, NpyError> {
    let path = path.as_ref();
    let mut f = BufReader::new(File::open(path)?);
    let header = read_header(&mut f)?;
    tracing::debug!(path = %path.display(), shape = %header.shape, descr = %header.descr, "loaded npy header");
    Ok(header)
}

/// Reads exactly one header from `r`, leaving it positioned at the start of
/// the payload.
///
/// A stream that ends inside the header is
/// [HeaderError::TruncatedHeader](npyhdr_core::HeaderError::TruncatedHeader),
/// not an io error.
pub fn read_header<R: Read>(r: &mut R) -> Result<Header, NpyError> {
    let mut bytes = vec![0; PREFIX_LEN];
    let n = read_up_to(r, &mut bytes)?;
    bytes.truncate(n);
    let header_len = header::header_len(&bytes)?;

    bytes.resize(PREFIX_LEN + header_len, 0);
    let n = read_up_to(r, &mut bytes[PREFIX_LEN..])?;
    bytes.truncate(PREFIX_LEN + n);

    Ok(Header::decode(&bytes)?)
}

/// Like [Read::read_exact], but stops quietly at end of stream.
fn read_up_to<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use npyhdr_core::{header::HeaderOptions, HeaderError};
    use std::io::Cursor;

    #[test]
    fn test_read_header_leaves_payload() {
        let header = Header::new("<i4".parse().unwrap(), [2, 2]);
        let mut bytes = header.encode_with(&HeaderOptions::minimal()).unwrap();
        bytes.extend_from_slice(&[1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 4, 0, 0, 0]);

        let mut r = Cursor::new(bytes);
        assert_eq!(read_header(&mut r).unwrap(), header);

        let mut payload = Vec::new();
        r.read_to_end(&mut payload).unwrap();
        assert_eq!(payload.len(), header.payload_len());
        assert_eq!(payload[8], 3);
    }

    #[test]
    fn test_read_header_short_stream() {
        let bytes = Header::new("<f4".parse().unwrap(), [5]).encode().unwrap();

        let err = read_header(&mut Cursor::new(&bytes[..50])).unwrap_err();
        assert!(matches!(
            err,
            NpyError::Header(HeaderError::TruncatedHeader { available: 40, .. })
        ));

        let err = read_header(&mut Cursor::new(&bytes[..4])).unwrap_err();
        assert!(matches!(
            err,
            NpyError::Header(HeaderError::TruncatedHeader { .. })
        ));

        let err = read_header(&mut Cursor::new(b"PK\x03\x04 zip archive")).unwrap_err();
        assert!(matches!(
            err,
            NpyError::Header(HeaderError::BadMagic { .. })
        ));
    }

    #[test]
    fn test_load_header_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_header(dir.path().join("missing.npy")).unwrap_err();
        assert!(matches!(err, NpyError::Io(_)));
    }
}
