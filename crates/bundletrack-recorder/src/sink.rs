use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Faults of the recorder's own I/O. Build failures are never errors
/// here; they are data written into the document.
#[derive(Debug)]
pub enum RecordError {
    Io { path: PathBuf, source: io::Error },
    Json(serde_json::Error),
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::Io { path, source } => {
                write!(
                    f,
                    "failed to write status file '{}': {}",
                    path.display(),
                    source
                )
            }
            RecordError::Json(error) => {
                write!(f, "failed to serialize status document: {}", error)
            }
        }
    }
}

impl std::error::Error for RecordError {}

impl From<serde_json::Error> for RecordError {
    fn from(error: serde_json::Error) -> Self {
        RecordError::Json(error)
    }
}

/// Writes serialized documents to `<outputPath>/<outputFilename>`.
///
/// Parent directories are created on every write (idempotent). The file
/// is overwritten in place with no atomic-rename publish; a reader racing
/// the overwrite window may observe a partial file.
#[derive(Clone, Debug)]
pub struct FileSink {
    target: PathBuf,
}

impl FileSink {
    pub fn new(output_path: &str, output_filename: &str) -> Self {
        Self {
            target: Path::new(output_path).join(output_filename),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn write(&self, contents: &[u8]) -> Result<(), RecordError> {
        if let Some(parent) = self.target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| RecordError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        fs::write(&self.target, contents).map_err(|source| RecordError::Io {
            path: self.target.clone(),
            source,
        })
    }
}
