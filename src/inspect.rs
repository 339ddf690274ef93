//! Entry inspection: one `lstat` and one symlink resolution per path.
//!
//! The inspector never fails on a bad symlink. A link whose target does not
//! resolve is kept, marked broken, and treated as a plain file by everything
//! downstream.

use crate::classify::{MimeOracle, classify};
use crate::data::{ContentCategory, EntryInfo, EntryType, LinkTarget, StatSnapshot};
use crate::utils::{is_readable, relative_display, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Builds the [`EntryInfo`] for `path`.
///
/// # Errors
/// Only when `path` itself can no longer be `lstat`-ed (for example it was
/// removed after the directory was listed).
pub fn inspect_entry(path: &Path) -> io::Result<EntryInfo> {
    let meta = fs::symlink_metadata(path)?;
    let stat = StatSnapshot::from(&meta);

    let link = if meta.file_type().is_symlink() {
        Some(resolve_link(path))
    } else {
        None
    };

    let is_dir = match &link {
        Some(target) => target.is_dir,
        None => meta.is_dir(),
    };
    let entry_type = if is_dir { EntryType::Dir } else { EntryType::File };

    Ok(EntryInfo::new(path.to_path_buf(), entry_type, stat, link))
}

/// Resolves a symlink to its final target.
///
/// Broken links fall back to the raw link text joined onto the link's parent
/// directory, and never count as directories.
pub fn resolve_link(path: &Path) -> LinkTarget {
    match fs::canonicalize(path) {
        Ok(real) => {
            let target_meta = fs::metadata(&real).ok();
            LinkTarget {
                display: relative_display(&real),
                is_dir: target_meta.as_ref().is_some_and(|m| m.is_dir()),
                size: target_meta.map(|m| m.len()),
                broken: false,
                real,
            }
        }
        Err(err) => {
            warn(format!("Broken symlink '{}': {}", path.display(), err));
            let raw = match fs::read_link(path) {
                Ok(target) => match path.parent() {
                    Some(parent) => parent.join(target),
                    None => target,
                },
                Err(_) => path.to_path_buf(),
            };
            LinkTarget {
                display: relative_display(&raw),
                is_dir: false,
                size: None,
                broken: true,
                real: raw,
            }
        }
    }
}

/// Decides the content category of an entry.
///
/// Order: directory, not readable, empty, then the oracle. Broken links are
/// not readable without asking the filesystem again. The size used for the
/// empty check is the target's size for resolved symlinks.
pub fn derive_category(entry: &EntryInfo, oracle: &dyn MimeOracle) -> ContentCategory {
    if entry.is_dir() {
        return ContentCategory::Directory;
    }
    if entry.has_broken_link() || !is_readable(&entry.path) {
        return ContentCategory::NotReadable;
    }
    if entry.payload_size() == 0 {
        return ContentCategory::Empty;
    }
    classify(&entry.path, oracle)
}
