//! String payload decoders.
//!
//! UTF-16 payloads are decoded permissively: unpaired surrogates become
//! U+FFFD. UTF-8 payloads are validated and rejected when malformed.

use crate::error::{ParseError, Result};
use crate::length::read_length;
use crate::reader::ByteReader;

/// Decode a UTF-16 string: a `u16` length prefix counting code units,
/// followed by that many little-endian code units.
pub fn decode_utf16(r: &mut ByteReader<'_>) -> Result<String> {
    let units = read_length::<u16>(r)? as usize;
    let bytes = r.read_bytes(units * 2, "UTF-16 string data")?;

    let code_units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
    let mut s: String = char::decode_utf16(code_units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();

    let end = s.trim_end_matches('\0').len();
    s.truncate(end);
    Ok(s)
}

/// Decode a UTF-8 string: a `u8` length prefix giving the UTF-16 length,
/// a second `u8` length prefix giving the byte length, then the bytes.
///
/// The byte length is authoritative; the UTF-16 length is only compared for
/// diagnostics.
pub fn decode_utf8(r: &mut ByteReader<'_>) -> Result<String> {
    let utf16_len = read_length::<u8>(r)?;
    let byte_len = read_length::<u8>(r)? as usize;
    let start = r.offset();
    let bytes = r.read_bytes(byte_len, "UTF-8 string data")?;

    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |last| last + 1);
    let s = std::str::from_utf8(&bytes[..end]).map_err(|e| ParseError::InvalidUtf8 {
        offset: start,
        valid_up_to: e.valid_up_to(),
    })?;

    if log::log_enabled!(log::Level::Debug) {
        let actual = s.encode_utf16().count();
        if actual != utf16_len as usize {
            log::debug!(
                "UTF-8 string at {start:#x}: declared UTF-16 length {utf16_len}, decoded {actual}"
            );
        }
    }

    Ok(s.to_owned())
}
