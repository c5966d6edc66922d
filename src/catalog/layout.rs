//! Discovery of database directories and the files inside them.
//!
//! A catalog root holds one subdirectory per database. Each database directory
//! carries exactly one index file and exactly one lookup file, identified by
//! extension.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::store::CatalogError;

/// Check if the path has the given extension (case-insensitive)
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Find the single regular file in `dir` carrying `extension`.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the directory cannot be listed,
/// `CatalogError::MissingFile` if no file matches, or
/// `CatalogError::AmbiguousFile` if more than one does.
pub fn find_unique_file(dir: &Path, extension: &str) -> Result<PathBuf, CatalogError> {
    let mut matches = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, extension) {
            matches.push(path);
        }
    }
    matches.sort();

    match matches.len() {
        0 => Err(CatalogError::MissingFile {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
        }),
        1 => {
            let path = matches.remove(0);
            debug!(path = %path.display(), "Located .{extension} file");
            Ok(path)
        }
        _ => Err(CatalogError::AmbiguousFile {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
            candidates: matches,
        }),
    }
}

/// List the names of the database subdirectories under `root`, sorted.
///
/// Entries whose names are not valid UTF-8 are skipped.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the directory cannot be listed.
pub fn list_databases(root: &Path) -> Result<Vec<String>, CatalogError> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if entry.path().is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
