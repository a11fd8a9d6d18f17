//! Path/URI conversion.
//!
//! Editor hosts identify open files by URI while local hosts deal in
//! filesystem paths. This module keeps the conversion self-contained so both
//! [`crate::FileStore`] implementations and event producers agree on the
//! `file://` form.

use std::fs;
use std::path::{Path, PathBuf};

/// Convert a local filesystem path to a `file://` URI.
///
/// The path is canonicalized when possible so events fired for `./a.py` and
/// an absolute spelling of the same file key the same mark.
pub fn path_to_uri(path: &Path) -> String {
    let abs = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let mut raw = abs.to_string_lossy().to_string();

    // Normalize to forward slashes for URIs.
    if cfg!(windows) {
        raw = raw.replace('\\', "/");
        if !raw.starts_with('/') {
            raw.insert(0, '/');
        }
    }

    format!("file://{}", percent_encode(&raw))
}

/// Convert a `file://` URI back into a local filesystem path.
///
/// Returns `None` for URIs with a different scheme; callers that also accept
/// bare paths handle that case themselves.
pub fn uri_to_path(uri: &str) -> Option<PathBuf> {
    let rest = uri.strip_prefix("file://")?;
    let rest = rest.strip_prefix("localhost/").unwrap_or(rest);

    let mut decoded = percent_decode(rest);

    // `file:///C:/...` -> `C:/...`
    if cfg!(windows) {
        if decoded.starts_with('/') && decoded.get(2..3) == Some(":") {
            decoded.remove(0);
        }
        decoded = decoded.replace('/', "\\");
    }

    Some(PathBuf::from(decoded))
}

/// Keeps unreserved bytes and `/`, percent-encodes everything else. Targets
/// the URIs produced by [`path_to_uri`], not general URI handling.
fn percent_encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for &b in raw.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

fn percent_decode(raw: &str) -> String {
    fn hex_val(b: u8) -> Option<u8> {
        match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'a'..=b'f' => Some(b - b'a' + 10),
            b'A'..=b'F' => Some(b - b'A' + 10),
            _ => None,
        }
    }

    let bytes = raw.as_bytes();
    let mut out = Vec::<u8>::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && let (Some(hi), Some(lo)) = (hex_val(bytes[i + 1]), hex_val(bytes[i + 2]))
        {
            out.push((hi << 4) | lo);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_roundtrip() {
        let input = "/tmp/hello world.py";
        assert_eq!(percent_decode(&percent_encode(input)), input);
    }

    #[test]
    fn test_file_uri_roundtrip() {
        let path = Path::new("/tmp/hello world.py");
        let uri = path_to_uri(path);
        assert!(uri.starts_with("file://"));
        let back = uri_to_path(&uri).unwrap();
        assert!(back.to_string_lossy().contains("hello world.py"));
    }

    #[test]
    fn test_non_file_scheme_is_rejected() {
        assert_eq!(uri_to_path("content://sdcard/test.py"), None);
        assert_eq!(uri_to_path("/tmp/test.py"), None);
    }
}
