use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing listings
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Writes listing documents into one output directory
pub struct ListingWriter {
    output_dir: PathBuf,
}

impl ListingWriter {
    /// Create the writer, creating the output directory if needed
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Result<Self, OutputError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&output_dir).map_err(|source| OutputError::Io {
            path: output_dir.display().to_string(),
            source,
        })?;

        Ok(Self { output_dir })
    }

    /// Serialize `document` to `<output_dir>/<name>.json`
    pub fn write<T: Serialize>(&self, name: &str, document: &T) -> Result<PathBuf, OutputError> {
        let path = self.output_dir.join(format!("{}.json", name));
        let json = serde_json::to_string_pretty(document)?;

        std::fs::write(&path, json).map_err(|source| OutputError::Io {
            path: path.display().to_string(),
            source,
        })?;

        tracing::debug!("Wrote {}", path.display());
        Ok(path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
