// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size-gated header reading.
//!
//! Test headers are small; anything above the size limit is almost certainly
//! not a test header and is rejected before it is read into memory.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Size at which to log a note about large headers (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Maximum header size to read (10MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Size-gated text reader.
pub struct FileReader {
    /// Maximum file size to read.
    max_size: u64,
}

impl Default for FileReader {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
        }
    }
}

impl FileReader {
    /// Create a new file reader with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with a custom max size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Read a file as UTF-8 text, checking size limits.
    ///
    /// Returns `Err(FileTooLarge)` for files exceeding max_size and
    /// `Err(Io)` with `InvalidData` for files that are not valid UTF-8.
    pub fn read(&self, path: &Path) -> Result<String> {
        let metadata = std::fs::metadata(path).map_err(|e| Error::io(path, e))?;

        let size = metadata.len();

        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large header"
            );
        }

        let bytes = self.read_direct(path, size)?;
        String::from_utf8(bytes).map_err(|e| {
            Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidData, e.utf8_error()),
            )
        })
    }

    /// Read file directly into buffer.
    fn read_direct(&self, path: &Path, size: u64) -> Result<Vec<u8>> {
        let mut file = File::open(path).map_err(|e| Error::io(path, e))?;

        let mut buffer = Vec::with_capacity(size as usize);
        file.read_to_end(&mut buffer)
            .map_err(|e| Error::io(path, e))?;

        Ok(buffer)
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
