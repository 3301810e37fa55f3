#![forbid(unsafe_code)]

use super::error::StoreError;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Where the serialized task document lives.
///
/// The store moves the document whole, so a backend only reads or replaces
/// one string. `read` returns `None` while the document does not exist yet.
pub trait Backend: std::fmt::Debug {
    fn read(&self) -> Result<Option<String>, StoreError>;
    fn write(&mut self, document: &str) -> Result<(), StoreError>;
}

/// Backing file on disk. Created on first write; replaced through a sibling
/// temp file and rename so an interrupted write cannot leave a torn document.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Backend for FileBackend {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(document) => Ok(Some(document)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    fn write(&mut self, document: &str) -> Result<(), StoreError> {
        let mut tmp = self.path.as_os_str().to_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, document)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory document with the same contract as `FileBackend`, for tests
/// that should not touch the filesystem.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    document: Option<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
        }
    }
}

impl Backend for MemoryBackend {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.document.clone())
    }

    fn write(&mut self, document: &str) -> Result<(), StoreError> {
        self.document = Some(document.to_string());
        Ok(())
    }
}
