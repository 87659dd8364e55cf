//! Archive extraction.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use zip::ZipArchive;

use super::{RedistributeError, RedistributeResult};

/// Unpacks frame archives.
pub trait ArchiveExtractor {
    /// Extract all entries of `archive_path` into `dest_dir`.
    ///
    /// Returns the number of files extracted.
    fn extract(&self, archive_path: &Path, dest_dir: &Path) -> RedistributeResult<usize>;

    /// List entry names of an archive without extracting it.
    fn list_contents(&self, archive_path: &Path) -> RedistributeResult<Vec<String>>;
}

/// Extractor for `.zip` archives.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipExtractor;

impl ZipExtractor {
    /// Create a new zip extractor.
    pub fn new() -> Self {
        Self
    }

    fn open(&self, archive_path: &Path) -> RedistributeResult<ZipArchive<BufReader<File>>> {
        let file = File::open(archive_path).map_err(|e| RedistributeError::ReadFailed {
            path: archive_path.to_path_buf(),
            source: e,
        })?;

        ZipArchive::new(BufReader::new(file)).map_err(|e| RedistributeError::ExtractionFailed {
            path: archive_path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

impl ArchiveExtractor for ZipExtractor {
    fn extract(&self, archive_path: &Path, dest_dir: &Path) -> RedistributeResult<usize> {
        let mut archive = self.open(archive_path)?;
        let files = archive
            .file_names()
            .filter(|name| !name.ends_with('/'))
            .count();

        archive
            .extract(dest_dir)
            .map_err(|e| RedistributeError::ExtractionFailed {
                path: archive_path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(files)
    }

    fn list_contents(&self, archive_path: &Path) -> RedistributeResult<Vec<String>> {
        let archive = self.open(archive_path)?;
        let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;
    use zip::{CompressionMethod, ZipWriter};

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let mut writer = ZipWriter::new(File::create(path).unwrap());
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        for (name, data) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_list_contents_sorted() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("amoeba-early.zip");
        write_zip(&archive, &[("1.png", b"b"), ("0.png", b"a")]);

        let names = ZipExtractor::new().list_contents(&archive).unwrap();
        assert_eq!(names, vec!["0.png", "1.png"]);
    }

    #[test]
    fn test_extract_writes_files() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("amoeba-early.zip");
        write_zip(&archive, &[("0.png", b"zero"), ("1.png", b"one")]);

        let dest = temp.path().join("out");
        fs::create_dir_all(&dest).unwrap();

        let count = ZipExtractor::new().extract(&archive, &dest).unwrap();
        assert_eq!(count, 2);
        assert_eq!(fs::read(dest.join("0.png")).unwrap(), b"zero");
        assert_eq!(fs::read(dest.join("1.png")).unwrap(), b"one");
    }

    #[test]
    fn test_corrupt_archive_fails() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("broken-early.zip");
        fs::write(&archive, b"not a zip").unwrap();

        let err = ZipExtractor::new().list_contents(&archive).unwrap_err();
        assert!(matches!(err, RedistributeError::ExtractionFailed { .. }));
    }

    #[test]
    fn test_missing_archive_fails() {
        let temp = TempDir::new().unwrap();
        let err = ZipExtractor::new()
            .list_contents(&temp.path().join("missing.zip"))
            .unwrap_err();
        assert!(matches!(err, RedistributeError::ReadFailed { .. }));
    }
}
