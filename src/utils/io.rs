//! Shared file-reading helpers.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

/// Read a whole text file, transparently decompressing `.gz` inputs.
///
/// The reference distributions ship gzipped (`cddid.tbl.gz`,
/// `Pfam-A.hmm.gz`, `Pfam-A.full.gz`); callers never need to care which
/// form is on disk.
///
/// # Errors
///
/// Returns `std::io::Error` if the file cannot be opened, read, or
/// decompressed.
pub fn read_maybe_gzipped(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut text = String::new();

    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        GzDecoder::new(file).read_to_string(&mut text)?;
    } else {
        file.read_to_string(&mut text)?;
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_read_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.tbl");
        std::fs::write(&path, "hello\tworld\n").unwrap();

        assert_eq!(read_maybe_gzipped(&path).unwrap(), "hello\tworld\n");
    }

    #[test]
    fn test_read_gzipped_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.tbl.gz");

        let file = File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(b"hello\tworld\n").unwrap();
        encoder.finish().unwrap();

        assert_eq!(read_maybe_gzipped(&path).unwrap(), "hello\tworld\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_maybe_gzipped(&dir.path().join("absent.tbl"));
        assert!(result.is_err());
    }
}
