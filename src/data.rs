//! Data structures for representing listed entries.
//!
//! This module defines the per-entry description built by the inspector and
//! consumed by the column rules: logical type, content category, the `lstat`
//! snapshot and the resolved symlink target.

use crate::classify::MimeOracle;
use once_cell::unsync::OnceCell;
use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

/// Represents the logical type of a listed entry.
///
/// Symlinks take the type of their resolved target, so a link to a directory
/// is a `Dir`. Broken links are always `File`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryType {
    Dir,
    File,
}

impl EntryType {
    /// Returns a string representation of the entry type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::File => "file",
            EntryType::Dir => "directory",
        }
    }
}

/// Closed classification of an entry's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCategory {
    Directory,
    NotReadable,
    Empty,
    BinaryExecutable,
    BinaryOther,
    Text,
    Other,
    Unknown,
}

impl ContentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentCategory::Directory => "directory",
            ContentCategory::NotReadable => "not_readable",
            ContentCategory::Empty => "empty",
            ContentCategory::BinaryExecutable => "binary_executable",
            ContentCategory::BinaryOther => "binary_other",
            ContentCategory::Text => "text",
            ContentCategory::Other => "other",
            ContentCategory::Unknown => "unknown",
        }
    }

    /// One-letter tag shown in the file-type column.
    pub fn type_tag(&self) -> char {
        match self {
            ContentCategory::Directory => 'd',
            ContentCategory::BinaryExecutable => 'e',
            ContentCategory::BinaryOther => 'b',
            ContentCategory::Text => 't',
            _ => 'u',
        }
    }
}

/// The subset of `lstat` fields the columns need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatSnapshot {
    pub mode: u32,
    pub mtime: i64,
    pub mtime_nsec: i64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
}

impl From<&Metadata> for StatSnapshot {
    fn from(meta: &Metadata) -> Self {
        Self {
            mode: meta.mode(),
            mtime: meta.mtime(),
            mtime_nsec: meta.mtime_nsec(),
            uid: meta.uid(),
            gid: meta.gid(),
            size: meta.size(),
        }
    }
}

/// Where a symlink points, resolved once per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    /// Path used for any I/O against the target.
    pub real: PathBuf,
    /// Target as displayed, relative to the working directory.
    pub display: String,
    pub is_dir: bool,
    /// Byte size of the resolved target, when it could be read.
    pub size: Option<u64>,
    /// `true` when the target does not resolve.
    pub broken: bool,
}

/// One scanned path and everything derived from it for a single listing.
///
/// # Fields
/// * `path` - Path used for I/O, as produced by the scanner
/// * `name` - Display form of `path`; never rewritten for symlinks
/// * `entry_type` - Logical type, evaluated against the symlink target
/// * `stat` - `lstat` snapshot (a symlink's own mode, owner and size)
/// * `link` - Resolved target when `path` is a symlink
#[derive(Debug, Clone)]
pub struct EntryInfo {
    pub path: PathBuf,
    pub name: String,
    pub entry_type: EntryType,
    pub stat: StatSnapshot,
    pub link: Option<LinkTarget>,
    category: OnceCell<ContentCategory>,
}

impl EntryInfo {
    pub fn new(
        path: PathBuf,
        entry_type: EntryType,
        stat: StatSnapshot,
        link: Option<LinkTarget>,
    ) -> Self {
        let name = path.to_string_lossy().into_owned();
        Self {
            path,
            name,
            entry_type,
            stat,
            link,
            category: OnceCell::new(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Dir
    }

    /// `true` for a symlink whose target does not resolve.
    pub fn has_broken_link(&self) -> bool {
        self.link.as_ref().is_some_and(|target| target.broken)
    }

    /// Path to read from: the resolved target for symlinks, otherwise `path`.
    pub fn real_path(&self) -> &Path {
        match &self.link {
            Some(target) => &target.real,
            None => &self.path,
        }
    }

    /// Byte size of the payload: the target's size for resolved symlinks,
    /// otherwise the `lstat` size.
    pub fn payload_size(&self) -> u64 {
        self.link
            .as_ref()
            .and_then(|target| target.size)
            .unwrap_or(self.stat.size)
    }

    /// Content category, computed on first use and cached for the entry.
    ///
    /// The oracle is consulted at most once, and never for directories,
    /// unreadable files or empty files.
    pub fn content_category(&self, oracle: &dyn MimeOracle) -> ContentCategory {
        *self
            .category
            .get_or_init(|| crate::inspect::derive_category(self, oracle))
    }

    /// Category if it has already been computed.
    pub fn cached_category(&self) -> Option<ContentCategory> {
        self.category.get().copied()
    }
}
