// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Resolution of file references against a base directory.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve a file reference to an absolute path string.
///
/// Absolute references pass through untouched apart from lexical
/// normalization; relative references are resolved against `base_dir`.
/// Resolution never consults the filesystem: the referenced file does not
/// have to exist, and symlinks are not chased.
pub fn resolve_source_path(base_dir: &Path, reference: &str) -> Result<String> {
    if reference.is_empty() {
        return Err(Error::PathResolution(reference.to_owned()));
    }

    let reference_path = Path::new(reference);
    let resolved = if reference_path.is_absolute() {
        normalize(reference_path)
    } else {
        normalize(&base_dir.join(reference_path))
    };

    if !resolved.is_absolute() {
        return Err(Error::PathResolution(reference.to_owned()));
    }

    resolved
        .into_os_string()
        .into_string()
        .map_err(|raw| Error::NonUtf8Path(PathBuf::from(raw)))
}

/// Lexically collapse `.` and `..` components.
///
/// `..` pops the previous normal component and saturates at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(Component::ParentDir.as_os_str()),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
