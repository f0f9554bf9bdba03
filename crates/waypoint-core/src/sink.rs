//! Destinations for exported documents.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Accepts an exported document and stores it somewhere the user can reach.
pub trait DownloadSink {
    /// Store `bytes`, using `file_name` as the suggested name, and return
    /// where the document ended up.
    fn save(&self, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf>;
}

/// Writes exports into a directory under the suggested file name.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl DownloadSink for DirectorySink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)?;
        Ok(path)
    }
}

/// Writes exports to one fixed path, ignoring the suggested name.
#[derive(Debug, Clone)]
pub struct PathSink {
    path: PathBuf,
}

impl PathSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DownloadSink for PathSink {
    fn save(&self, _file_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, bytes)?;
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_directory_sink_uses_suggested_name() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let sink = DirectorySink::new(temp_dir.path().join("exports"));

        let path = sink.save("roadmap.json", b"{}").unwrap();

        assert_eq!(path, temp_dir.path().join("exports").join("roadmap.json"));
        assert_eq!(fs::read_to_string(path).unwrap(), "{}");
    }

    #[test]
    fn test_path_sink_ignores_suggested_name() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let target = temp_dir.path().join("mine.json");
        let sink = PathSink::new(&target);

        let path = sink.save("roadmap.json", b"[]").unwrap();

        assert_eq!(path, target);
        assert!(!temp_dir.path().join("roadmap.json").exists());
    }
}
