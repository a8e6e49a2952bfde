//! Turning raw file bytes into interface source text.
//!
//! Interface files are plain text; anything else found under the root
//! (compiled assets, images) is refused rather than scanned for markers.

use memchr::memchr;

use crate::error::IoError;

/// Bytes inspected when sniffing for binary content.
const SNIFF_WINDOW: usize = 8 * 1024;

/// True when a NUL byte appears in the leading sniff window.
#[must_use]
pub fn is_binary(buffer: &[u8]) -> bool {
    let window = &buffer[..buffer.len().min(SNIFF_WINDOW)];
    memchr(0, window).is_some()
}

/// Source text for the extractor; invalid UTF-8 sequences become U+FFFD.
///
/// # Errors
/// `IoError::BinaryFile` for content that is not text.
pub fn decode_source(buffer: Vec<u8>) -> Result<String, IoError> {
    if is_binary(&buffer) {
        return Err(IoError::BinaryFile);
    }

    Ok(match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
