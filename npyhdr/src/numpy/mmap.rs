use super::{check_payload_len, NpyError};
use memmap2::{Mmap, MmapOptions};
use npyhdr_core::header::Header;
use std::{fs::File, path::Path};

/// A memory-mapped `.npy` file with a decoded header.
///
/// The payload is borrowed straight from the mapping.
#[derive(Debug)]
pub struct NpyFile {
    header: Header,
    payload_offset: usize,
    buffer: Mmap,
}

impl NpyFile {
    /// Maps the file at `path`, decodes its header and checks the payload
    /// holds exactly [Header::payload_len()] bytes.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, NpyError> {
        let path = path.as_ref();
        let f = File::open(path)?;
        // SAFETY: the mapping is read only; the file must not be truncated while mapped
        let buffer = unsafe { MmapOptions::new().map(&f)? };

        let (header, payload_offset) = Header::decode_prefix(&buffer)?;
        check_payload_len(header.payload_len(), buffer.len() - payload_offset)?;

        tracing::debug!(
            path = %path.display(),
            shape = %header.shape,
            descr = %header.descr,
            payload_offset,
            "mapped npy file"
        );
        Ok(Self {
            header,
            payload_offset,
            buffer,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Byte offset of the payload from the start of the file. Always a
    /// multiple of 16.
    pub fn payload_offset(&self) -> usize {
        self.payload_offset
    }

    pub fn payload(&self) -> &[u8] {
        &self.buffer[self.payload_offset..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numpy::save;
    use npyhdr_core::{header::ALIGNMENT, HeaderError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_open_and_read_payload() {
        let header = Header::for_type::<u8>([2, 3]);
        let file = NamedTempFile::new().unwrap();
        save(file.path(), &header, &[1, 2, 3, 4, 5, 6]).expect("save failed");

        let npy = NpyFile::open(file.path()).expect("open failed");
        assert_eq!(npy.header(), &header);
        assert_eq!(npy.payload_offset() % ALIGNMENT, 0);
        assert_eq!(npy.payload(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_open_rejects_short_payload() {
        let header = Header::new("<f4".parse().unwrap(), [4]);
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&header.encode().unwrap()).unwrap();
        file.write_all(&[0; 12]).unwrap();
        file.flush().unwrap();

        let err = NpyFile::open(file.path()).unwrap_err();
        assert!(matches!(
            err,
            NpyError::PayloadLength {
                expected: 16,
                found: 12
            }
        ));
    }

    #[test]
    fn test_open_rejects_bad_header() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\x93NUMPY\x02\x00").unwrap();
        file.flush().unwrap();

        let err = NpyFile::open(file.path()).unwrap_err();
        assert!(matches!(err, NpyError::Header(HeaderError::BadMagic { .. })));
    }
}
