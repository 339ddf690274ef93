//! Directory scanning module for `ruls`.
//!
//! Lists the direct children of the start directory with `WalkDir`
//! (depth 1, symlinks not followed) and applies the optional substring
//! filter to each bare file name. Returned paths are joined onto the start
//! path as seen from the working directory, so `.` yields bare names.

use crate::errors::ListError;
use crate::utils::{relative_display, warn};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Prefix the scanner joins child names onto.
fn display_prefix(start: &Path) -> PathBuf {
    let relative = relative_display(start);
    if relative == "." {
        PathBuf::new()
    } else {
        PathBuf::from(relative)
    }
}

/// Lists the entries of `start`, keeping names that contain `filter`.
///
/// # Arguments
/// * `start` - Directory to list
/// * `filter` - Optional substring every kept file name must contain
///
/// # Returns
/// * `Result<Vec<PathBuf>, ListError>` - Paths in directory order
///
/// # Errors
/// * [`ListError::PathNotFound`] if `start` is missing or not a directory
/// * [`ListError::Unreadable`] if `start` cannot be listed
pub fn scan_entries(start: &Path, filter: Option<&str>) -> Result<Vec<PathBuf>, ListError> {
    if !start.is_dir() {
        return Err(ListError::PathNotFound(start.to_path_buf()));
    }

    let prefix = display_prefix(start);
    let mut paths = Vec::new();

    for entry in WalkDir::new(start)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(ListError::Unreadable {
                    path: start.to_path_buf(),
                    source: err
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other("directory walk failed")),
                });
            }
            Err(err) => {
                warn(format!("Skipping entry: {}", err));
                continue;
            }
        };

        let name = entry.file_name();
        if let Some(needle) = filter {
            if !name.to_string_lossy().contains(needle) {
                continue;
            }
        }
        paths.push(prefix.join(name));
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_start_is_path_not_found() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let result = scan_entries(&temp_dir.path().join("missing"), None);
        assert!(matches!(result, Err(ListError::PathNotFound(_))));
    }

    #[test]
    fn test_file_start_is_path_not_found() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file = temp_dir.path().join("plain");
        fs::write(&file, "x").expect("Failed to write file");
        assert!(matches!(
            scan_entries(&file, None),
            Err(ListError::PathNotFound(_))
        ));
    }

    #[test]
    fn test_lists_direct_children_only() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let sub = temp_dir.path().join("sub");
        fs::create_dir(&sub).expect("Failed to create sub");
        fs::write(sub.join("nested"), "x").expect("Failed to write nested");
        fs::write(temp_dir.path().join("top"), "x").expect("Failed to write top");

        let paths = scan_entries(temp_dir.path(), None).expect("scan");
        let mut names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["sub", "top"]);
        // Every returned path is usable from the working directory
        assert!(paths.iter().all(|p| p.exists()));
    }

    #[test]
    fn test_filter_is_plain_substring() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for name in ["main.rs", "lib.rs", "notes.txt", "a*b"] {
            fs::write(temp_dir.path().join(name), "x").expect("Failed to write");
        }

        let paths = scan_entries(temp_dir.path(), Some(".rs")).expect("scan");
        assert_eq!(paths.len(), 2);

        // No glob semantics
        let paths = scan_entries(temp_dir.path(), Some("*")).expect("scan");
        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("a*b"));
    }

    #[test]
    fn test_prefix_for_current_dir() {
        assert_eq!(display_prefix(Path::new(".")), PathBuf::new());
        assert_eq!(display_prefix(Path::new("./")), PathBuf::new());
        assert_eq!(display_prefix(Path::new("./src")), PathBuf::from("src"));
    }
}
