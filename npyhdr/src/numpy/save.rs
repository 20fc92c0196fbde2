//! Writing headers and payloads to a [Write] or a file.

use super::{check_payload_len, NpyError};
use npyhdr_core::header::{Header, HeaderOptions};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Saves `header` followed by `payload` to a new file at `path`, with the
/// default [HeaderOptions]. This calls [write()].
///
/// `payload` must hold exactly [Header::payload_len()] bytes.
pub fn save<P: AsRef<Path>>(path: P, header: &Header, payload: &[u8]) -> Result<(), NpyError> {
    let path = path.as_ref();
    let mut f = BufWriter::new(File::create(path)?);
    write(&mut f, header, payload, &HeaderOptions::default())?;
    f.flush()?;
    tracing::debug!(path = %path.display(), payload_len = payload.len(), "saved npy file");
    Ok(())
}

/// Writes the encoded header to `w`.
pub fn write_header<W: Write>(
    w: &mut W,
    header: &Header,
    options: &HeaderOptions,
) -> Result<(), NpyError> {
    let bytes = header.encode_with(options)?;
    w.write_all(&bytes)?;
    Ok(())
}

/// Writes the encoded header, then `payload`.
///
/// Nothing is written when the payload length does not match the header.
pub fn write<W: Write>(
    w: &mut W,
    header: &Header,
    payload: &[u8],
    options: &HeaderOptions,
) -> Result<(), NpyError> {
    check_payload_len(header.payload_len(), payload.len())?;
    write_header(w, header, options)?;
    w.write_all(payload)?;
    Ok(())
}
