//! Input format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Recognized input formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFormat {
    /// A raw PDF (e.g., version "1.7")
    Pdf {
        /// PDF version from the header
        version: String,
    },
    /// A JSON layout dump
    LayoutDump,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Pdf { version } => write!(f, "PDF {}", version),
            InputFormat::LayoutDump => write!(f, "layout dump"),
        }
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const HEADER_LEN: usize = 64;

/// Detect the input format of a file.
///
/// # Example
/// ```no_run
/// use pdfstitch::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("layout.json").unwrap();
/// println!("Input: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file).take(HEADER_LEN as u64);
    let mut header = Vec::with_capacity(HEADER_LEN);
    reader.read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the input format from the leading bytes of a file.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<InputFormat> {
    if data.starts_with(PDF_MAGIC) {
        if data.len() < PDF_MAGIC_LEN + VERSION_LEN {
            return Err(Error::UnknownFormat);
        }
        let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
        let version = String::from_utf8_lossy(version_bytes).to_string();
        if !is_valid_version(&version) {
            return Err(Error::UnknownFormat);
        }
        return Ok(InputFormat::Pdf { version });
    }

    let body = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    match body.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => Ok(InputFormat::LayoutDump),
        _ => Err(Error::UnknownFormat),
    }
}

/// Check if a version string is valid.
fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}

/// Check if a file is a PDF.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    matches!(detect_format_from_path(path), Ok(InputFormat::Pdf { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_valid_pdf() {
        let data = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3";
        let format = detect_format_from_bytes(data).unwrap();
        assert_eq!(
            format,
            InputFormat::Pdf {
                version: "1.7".into()
            }
        );
        assert_eq!(format.to_string(), "PDF 1.7");
    }

    #[test]
    fn test_detect_layout_dump() {
        assert_eq!(
            detect_format_from_bytes(b"  \n{\"pages\": []}").unwrap(),
            InputFormat::LayoutDump
        );
        assert_eq!(
            detect_format_from_bytes(b"\xEF\xBB\xBF{}").unwrap(),
            InputFormat::LayoutDump
        );
    }

    #[test]
    fn test_detect_invalid_format() {
        assert!(matches!(
            detect_format_from_bytes(b"<!DOCTYPE html>"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_format_from_bytes(b""),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_detect_too_short_pdf() {
        assert!(matches!(
            detect_format_from_bytes(b"%PDF-1"),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_version_validation() {
        assert!(is_valid_version("1.0"));
        assert!(is_valid_version("2.0"));
        assert!(!is_valid_version("10.0"));
        assert!(!is_valid_version("abc"));
    }

    #[test]
    fn test_detect_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, "{\"pages\": []}").unwrap();

        assert_eq!(
            detect_format_from_path(&path).unwrap(),
            InputFormat::LayoutDump
        );
        assert!(!is_pdf(&path));
    }
}
