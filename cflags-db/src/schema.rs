// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Database schema for recorded compiler flags.

/// Schema SQL for the flags table.
///
/// The composite primary key carries `ON CONFLICT REPLACE`: re-recording a
/// `(dir, file)` pair overwrites the previous row inside the insert itself,
/// with no delete-then-insert window. Columns are nullable; readers treat a
/// null column as a skippable anomaly.
pub const SCHEMA_SQL: &str = r#"
create table if not exists cflags (
    dir   text,
    file  text,
    flags text,
    primary key (dir, file) on conflict replace
);
"#;
