use crate::error::Result;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};
use std::path::Path;

/// Reads the whole input into a string. The special path `-` reads
/// standard input; a `.gz` suffix is decompressed transparently.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    let bytes = std::fs::read(path)?;
    if is_gzip_path(path) {
        let mut text = String::new();
        GzDecoder::new(bytes.as_slice()).read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Writes a file, gzip-compressing when the path carries a `.gz` suffix.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if is_gzip_path(path) {
        let file = std::fs::File::create(path)?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(content.as_bytes())?;
        encoder.finish()?;
    } else {
        std::fs::write(path, content)?;
    }
    Ok(())
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_files_pass_through_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entry.cif");
        write_output(&path, "data_test\n").unwrap();
        assert_eq!(read_input(&path).unwrap(), "data_test\n");
    }

    #[test]
    fn gzip_suffix_round_trips_through_compression() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entry.cif.gz");
        write_output(&path, "data_test\n").unwrap();

        let raw = std::fs::read(&path).unwrap();
        assert_eq!(&raw[..2], &[0x1f, 0x8b], "gzip magic bytes");
        assert_eq!(read_input(&path).unwrap(), "data_test\n");
    }

    #[test]
    fn missing_input_file_surfaces_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-file.cif");
        assert!(read_input(&path).is_err());
    }
}
