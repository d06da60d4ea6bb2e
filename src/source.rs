//! Log acquisition.
//!
//! A log source hands the colorizer the complete text of one log. Logs are
//! decoded as UTF-8; invalid sequences (a build killed mid-write can cut a
//! character in half) are replaced rather than rejected.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use humansize::{format_size, BINARY};
use tracing::{debug, warn};

use crate::error::SourceError;

/// Locator that selects standard input.
pub const STDIN_LOCATOR: &str = "-";

/// Supplies the raw text of one log.
pub trait LogSource {
    /// Human-readable locator, used in messages.
    fn locator(&self) -> String;

    fn read_log(&self) -> Result<String, SourceError>;
}

/// A log stored in a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSource for FileSource {
    fn locator(&self) -> String {
        self.path.display().to_string()
    }

    fn read_log(&self) -> Result<String, SourceError> {
        let bytes = fs::read(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SourceError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                SourceError::Read {
                    locator: self.locator(),
                    source,
                }
            }
        })?;
        Ok(decode(&self.locator(), bytes))
    }
}

/// A log piped in on standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl LogSource for StdinSource {
    fn locator(&self) -> String {
        "<stdin>".to_string()
    }

    fn read_log(&self) -> Result<String, SourceError> {
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .map_err(|source| SourceError::Read {
                locator: self.locator(),
                source,
            })?;
        Ok(decode(&self.locator(), bytes))
    }
}

/// Pick a source for a command-line locator: `-` is stdin, anything else a
/// file path.
pub fn source_for(locator: &str) -> Box<dyn LogSource + Send + Sync> {
    if locator == STDIN_LOCATOR {
        Box::new(StdinSource)
    } else {
        Box::new(FileSource::new(locator))
    }
}

/// Decode log bytes as UTF-8, replacing invalid sequences.
pub fn decode(locator: &str, bytes: Vec<u8>) -> String {
    let size = format_size(bytes.len() as u64, BINARY);
    match String::from_utf8(bytes) {
        Ok(text) => {
            debug!(locator, %size, "read log");
            text
        }
        Err(err) => {
            warn!(
                locator,
                %size,
                valid_up_to = err.utf8_error().valid_up_to(),
                "log is not valid UTF-8, replacing invalid sequences"
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}
