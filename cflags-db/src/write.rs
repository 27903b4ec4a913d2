// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Write operations for the flags database.

use std::path::Path;

use rusqlite::params;
use tracing::warn;

use crate::connection::FlagsDb;
use crate::error::{Error, Result};
use crate::resolve::resolve_source_path;
use crate::types::join_flags;

impl FlagsDb {
    /// Record compiler flags for a batch of source files.
    ///
    /// `flags_argv` is joined with single spaces into one string shared by
    /// every file in the batch: one compiler invocation applies one flag
    /// set to its whole input list. Each file reference is resolved against
    /// `base_dir` and written as one row keyed by `(base_dir, file)`; an
    /// existing row for that key is replaced.
    ///
    /// Files that fail to resolve, or whose parameters cannot be bound, are
    /// skipped with a warning and the batch continues. An engine-level step
    /// failure aborts the remaining batch. Rows are independent atomic
    /// writes, not one transaction: whatever succeeded before a failure
    /// stays persisted.
    pub fn record_flags<S, T>(&self, base_dir: &Path, files: &[S], flags_argv: &[T]) -> Result<()>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut stmt = self
            .conn
            .prepare_cached("INSERT INTO cflags (dir, file, flags) VALUES (?1, ?2, ?3)")?;

        let dir = base_dir
            .to_str()
            .ok_or_else(|| Error::NonUtf8Path(base_dir.to_owned()))?;
        let flags = join_flags(flags_argv);

        for file in files {
            let file = file.as_ref();
            let resolved = match resolve_source_path(base_dir, file) {
                Ok(resolved) => resolved,
                Err(e) => {
                    warn!("Skipping '{}': {}", file, e);
                    continue;
                }
            };

            match stmt.execute(params![dir, resolved, flags]) {
                Ok(_) => {}
                // The engine failing a step poisons the rest of the batch.
                Err(e @ rusqlite::Error::SqliteFailure(..)) => return Err(e.into()),
                Err(e) => warn!("Could not insert row for '{}': {}", file, e),
            }
        }

        Ok(())
    }
}
