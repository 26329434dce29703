use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::string::FromUtf8Error;
use thiserror::Error;

/// A visited file and its raw content. Lives only for the duration of one check.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: Utf8PathBuf,
    pub bytes: Vec<u8>,
}

/// Errors from loading a file's content
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

impl FileRecord {
    /// Read the whole file into memory.
    pub fn read(path: &Utf8Path) -> Result<Self, ReadError> {
        let bytes = fs::read(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    /// Strict UTF-8 decode. Fails on the first invalid sequence.
    pub fn into_text(self) -> Result<String, ReadError> {
        Ok(String::from_utf8(self.bytes)?)
    }
}
