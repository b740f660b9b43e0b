// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Line-oriented backing stores.
//!
//! Repositories never touch the filesystem directly. They read and write
//! whole collections through a [`LineStore`], one record per line.

use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PersistenceError;

/// A backing store holding one record per line.
pub trait LineStore {
    /// Reads every line currently in the store.
    ///
    /// A store that does not exist yet reads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read.
    fn read_lines(&self) -> Result<Vec<String>, PersistenceError>;

    /// Replaces the entire content of the store with `lines`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn write_lines(&mut self, lines: &[String]) -> Result<(), PersistenceError>;

    /// A human-readable location used in logs and error messages.
    fn origin(&self) -> String;
}

/// A store backed by a plain text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store for the file at `path`. The file is not touched until
    /// the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: &std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            origin: self.origin(),
            message: err.to_string(),
        }
    }
}

impl LineStore for FileStore {
    fn read_lines(&self) -> Result<Vec<String>, PersistenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content.lines().map(str::to_string).collect()),
            Err(err) if err.kind() == IoErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Store file does not exist yet");
                Ok(Vec::new())
            }
            Err(err) => Err(self.io_error(&err)),
        }
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| self.io_error(&err))?;
        }

        let mut content: String = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        std::fs::write(&self.path, content).map_err(|err| self.io_error(&err))
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

/// An in-memory store, used by tests and dry runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    lines: Vec<String>,
}

impl MemoryStore {
    /// Creates a store holding `lines`.
    #[must_use]
    pub const fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Creates a store from newline-separated text.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::to_string).collect())
    }

    /// The lines currently held.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl LineStore for MemoryStore {
    fn read_lines(&self) -> Result<Vec<String>, PersistenceError> {
        Ok(self.lines.clone())
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<(), PersistenceError> {
        self.lines = lines.to_vec();
        Ok(())
    }

    fn origin(&self) -> String {
        String::from("memory")
    }
}
