// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Query operations for the flags database.

use rusqlite::params;
use tracing::warn;

use crate::connection::FlagsDb;
use crate::error::Result;
use crate::types::FlagRecord;

impl FlagsDb {
    /// Stream records whose `dir` matches a glob pattern.
    ///
    /// Matching uses SQLite's native GLOB semantics (`*`, `?`, `[...]`),
    /// not LIKE. Rows arrive in engine order; callers must not rely on it.
    /// The visitor returns `true` to continue and `false` to stop early;
    /// stopping early is not an error. A row with a null column is skipped
    /// with a warning and iteration continues.
    pub fn query_flags<F>(&self, dir_glob: &str, mut visitor: F) -> Result<()>
    where
        F: FnMut(&FlagRecord) -> bool,
    {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT dir, file, flags FROM cflags WHERE dir GLOB ?1")?;

        let mut rows = stmt.query(params![dir_glob])?;
        while let Some(row) = rows.next()? {
            let dir: Option<String> = row.get(0)?;
            let file: Option<String> = row.get(1)?;
            let flags: Option<String> = row.get(2)?;

            let (Some(dir), Some(file), Some(flags)) = (dir, file, flags) else {
                warn!("Null column in cflags row, skipping");
                continue;
            };

            let record = FlagRecord { dir, file, flags };
            if !visitor(&record) {
                break;
            }
        }

        Ok(())
    }

    /// Collect all records whose `dir` matches a glob pattern.
    ///
    /// Buffers the full result set; prefer [`FlagsDb::query_flags`] when
    /// the caller can stop early.
    pub fn query_flags_all(&self, dir_glob: &str) -> Result<Vec<FlagRecord>> {
        let mut records = Vec::new();
        self.query_flags(dir_glob, |record| {
            records.push(record.clone());
            true
        })?;
        Ok(records)
    }

    /// Count the number of recorded entries.
    pub fn count_records(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM cflags", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
