//! File-reading capability injected into the scanner.

use std::io;

pub trait SourceReader: Send + Sync {
    fn read(&self, path: &str) -> io::Result<String>;
}

/// Any `Fn(&str) -> io::Result<String>` is a reader.
impl<F> SourceReader for F
where
    F: Fn(&str) -> io::Result<String> + Send + Sync,
{
    fn read(&self, path: &str) -> io::Result<String> {
        self(path)
    }
}

/// Reads from the local filesystem. Invalid UTF-8 is replaced rather than rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSourceReader;

impl SourceReader for FsSourceReader {
    fn read(&self, path: &str) -> io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => {
                tracing::debug!(path, "source is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn fs_reader_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "// TODO ABC-1").unwrap();
        let path = file.path().to_string_lossy().to_string();
        assert_eq!(FsSourceReader.read(&path).unwrap(), "// TODO ABC-1");
    }

    #[test]
    fn fs_reader_decodes_invalid_utf8_lossily() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"ok \xff TODO ABC-1").unwrap();
        let path = file.path().to_string_lossy().to_string();
        let content = FsSourceReader.read(&path).unwrap();
        assert!(content.ends_with("TODO ABC-1"));
    }

    #[test]
    fn fs_reader_missing_file_is_not_found() {
        let err = FsSourceReader.read("/no/such/file.js").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn closures_are_readers() {
        let reader = |path: &str| -> io::Result<String> { Ok(format!("content of {path}")) };
        assert_eq!(reader.read("a.js").unwrap(), "content of a.js");
    }
}
