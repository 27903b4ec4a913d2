// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Database row types for recorded compiler flags.

/// One recorded compilation entry.
///
/// This represents a row from the `cflags` table: the directory the
/// compiler ran in, the absolute path of the source file, and the flags of
/// that invocation joined by single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagRecord {
    /// Absolute directory the compiler ran in when the file was recorded
    pub dir: String,
    /// Absolute path of the source file
    pub file: String,
    /// Compiler flags joined by single spaces, in argument order
    pub flags: String,
}

impl FlagRecord {
    /// Split the stored flag string back into individual tokens.
    pub fn flags_argv(&self) -> Vec<&str> {
        self.flags.split_whitespace().collect()
    }

    /// Check whether any flags were recorded for this entry.
    pub fn has_flags(&self) -> bool {
        !self.flags.trim().is_empty()
    }
}

/// Join flag tokens with single spaces, in argument order.
pub(crate) fn join_flags<T: AsRef<str>>(argv: &[T]) -> String {
    argv.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_flags() {
        assert_eq!(join_flags(&["-O2", "-Wall"]), "-O2 -Wall");
        assert_eq!(join_flags::<&str>(&[]), "");
    }

    #[test]
    fn test_flags_argv_round_trip() {
        let record = FlagRecord {
            dir: "/a".into(),
            file: "/a/x.c".into(),
            flags: "-O2 -I/usr/include -DNDEBUG".into(),
        };

        let argv = record.flags_argv();
        assert_eq!(argv, vec!["-O2", "-I/usr/include", "-DNDEBUG"]);
        assert!(record.has_flags());
    }

    #[test]
    fn test_no_flags() {
        let record = FlagRecord {
            dir: "/a".into(),
            file: "/a/x.c".into(),
            flags: String::new(),
        };

        assert!(record.flags_argv().is_empty());
        assert!(!record.has_flags());
    }
}
