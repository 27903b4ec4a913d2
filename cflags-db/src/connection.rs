// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Database connection management.

use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::schema::SCHEMA_SQL;

/// How long a writer waits on another process's lock before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_millis(1000);

/// SQLite database handle for recorded compiler flags.
///
/// One thread drives one handle; cross-process contention is covered only
/// by the busy timeout configured at open time.
pub struct FlagsDb {
    pub(crate) conn: Connection,
}

impl FlagsDb {
    /// Open or create the flags database at `path`.
    ///
    /// Schema creation is idempotent; opening an already-initialized
    /// database is a no-op beyond connecting.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| Error::DatabaseOpen {
            path: path.to_owned(),
            source: e,
        })?;

        let db = Self { conn };
        db.configure_busy_timeout();
        db.create_schema().map_err(|e| Error::SchemaInit {
            path: path.to_owned(),
            source: e,
        })?;

        debug!("Opened flags database at {}", path.display());
        Ok(db)
    }

    /// Create an in-memory database (for testing).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.configure_busy_timeout();
        db.create_schema()?;
        debug!("Created in-memory flags database");
        Ok(db)
    }

    /// Bounded lock wait for writers racing another process.
    ///
    /// A failure to set the timeout is tolerated; the connection then fails
    /// fast on contention instead of waiting.
    fn configure_busy_timeout(&self) {
        if let Err(e) = self.conn.busy_timeout(BUSY_TIMEOUT) {
            warn!("Could not set busy timeout: {}", e);
        }
    }

    /// Create the flags table if it does not exist yet.
    fn create_schema(&self) -> rusqlite::Result<()> {
        self.conn.execute_batch(SCHEMA_SQL)
    }

    /// Get raw connection (for advanced usage).
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Check if the database has the expected schema table.
    pub fn has_schema(&self) -> Result<bool> {
        let count: i32 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='cflags'",
            [],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Close the database, surfacing any final error.
    ///
    /// Dropping the handle also closes it; this exists for callers that
    /// want the error instead of a silent drop.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::Sqlite(e))
    }
}
