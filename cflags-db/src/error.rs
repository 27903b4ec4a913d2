// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Error types for flags database operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for flags database operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during flags database operations.
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to open database with context
    #[error("Failed to open database at '{path}': {source}")]
    DatabaseOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Failed to create the schema on a fresh connection
    #[error("Failed to initialize schema at '{path}': {source}")]
    SchemaInit {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A file reference could not be resolved to an absolute path
    #[error("Cannot resolve '{0}' to an absolute path")]
    PathResolution(String),

    /// A resolved path cannot be stored as TEXT
    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),
}
