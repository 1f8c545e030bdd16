//! Text file detection utilities.
//!
//! A file is text when its extension is not ignored and the first
//! [`PROBE_LEN`] bytes decode as UTF-8. There is no extension allowlist.

use crate::config::ScanConfig;
use crate::error::CollectorError;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Number of bytes read to classify a file.
pub const PROBE_LEN: usize = 1024;

/// Outcome of classifying a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Extension is in the ignored set. The file was not opened.
    IgnoredExtension,
    /// Probe failed to decode, or the file could not be probed.
    Binary,
    /// Probe decoded as UTF-8.
    Text,
}

/// Classify a file as text or binary.
pub fn classify(config: &ScanConfig, path: &Path) -> Classification {
    if config.is_ignored_extension(path) {
        return Classification::IgnoredExtension;
    }

    match probe_is_text(path) {
        Ok(true) => Classification::Text,
        Ok(false) => Classification::Binary,
        Err(e) => {
            let error = CollectorError::probe_error(path, e);
            debug!(error = %error, "Probe failed, treating as binary");
            Classification::Binary
        }
    }
}

/// Check that the first [`PROBE_LEN`] bytes of a file decode as UTF-8.
///
/// One extra byte is read to learn whether the file continues past the
/// probe. The handle is dropped before returning.
pub fn probe_is_text(path: &Path) -> io::Result<bool> {
    let file = File::open(path)?;
    let mut buf = Vec::with_capacity(PROBE_LEN + 1);
    file.take(PROBE_LEN as u64 + 1).read_to_end(&mut buf)?;

    let truncated = buf.len() > PROBE_LEN;
    buf.truncate(PROBE_LEN);
    Ok(is_utf8_prefix(&buf, truncated))
}

/// Check whether `bytes` is valid UTF-8.
///
/// When `truncated` is set the buffer was cut at the probe limit, so a
/// multi-byte character left incomplete at the very end is accepted.
pub fn is_utf8_prefix(bytes: &[u8], truncated: bool) -> bool {
    match std::str::from_utf8(bytes) {
        Ok(_) => true,
        Err(e) => truncated && e.error_len().is_none(),
    }
}

/// Decode bytes as UTF-8, dropping any invalid sequences.
pub fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Read a whole file as UTF-8, dropping invalid sequences.
pub fn read_text(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => decode_dropping_invalid(e.as_bytes()),
    })
}
