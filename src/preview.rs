//! Short, single-line previews for the `preview` column.
//!
//! Every strategy reads a bounded amount of data and never returns an error:
//! unreadable input degrades to a placeholder (`-` for directories, a single
//! space for files).

use crate::data::{ContentCategory, EntryInfo};
use crate::utils::warn;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Children sampled for a directory preview.
pub const DIR_SAMPLE_LEN: usize = 32;
/// Characters kept from the joined child names.
pub const DIR_PREVIEW_LEN: usize = 38;
/// Bytes (binary) or characters (text) read from a file.
pub const PREVIEW_READ_LEN: usize = 256;
/// Characters kept from a file preview.
pub const PREVIEW_TRUNC_LEN: usize = 48;

/// Picks the preview strategy for an entry whose category is known.
pub fn preview_for(entry: &EntryInfo, category: ContentCategory) -> String {
    match category {
        ContentCategory::Directory => preview_directory(entry.real_path()),
        ContentCategory::BinaryOther => preview_binary(entry.real_path()),
        ContentCategory::Text => preview_text(entry.real_path()),
        _ => " ".to_string(),
    }
}

/// Lists up to [`DIR_SAMPLE_LEN`] child names, directories suffixed with `/`,
/// cut to [`DIR_PREVIEW_LEN`] characters on a name boundary. A trailing
/// ` ...` marks directories with more children than were sampled.
pub fn preview_directory(dir: &Path) -> String {
    let children: Vec<_> = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name())
            .collect(),
        Err(err) => {
            warn(format!("Cannot preview '{}': {}", dir.display(), err));
            return "-".to_string();
        }
    };

    let sampled: Vec<String> = children
        .iter()
        .take(DIR_SAMPLE_LEN)
        .map(|name| {
            let label = name.to_string_lossy();
            // is_dir follows symlinks; broken links are plain names
            if dir.join(name).is_dir() {
                format!("{}/", label)
            } else {
                label.into_owned()
            }
        })
        .collect();

    let cleaned = cut_on_boundary(&sampled.join(" "), DIR_PREVIEW_LEN);
    if sampled.len() < children.len() {
        format!("{} ...", cleaned)
    } else {
        cleaned
    }
}

/// Keeps at most `max` characters of `text`. When the cut lands inside a
/// name, backs up to the last space, unless that would leave nothing.
fn cut_on_boundary(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max).collect();
    if text.chars().nth(max) == Some(' ') {
        return truncated;
    }
    match truncated.rfind(' ') {
        Some(idx) if idx >= 1 => truncated[..idx].to_string(),
        _ => truncated,
    }
}

/// Collapses runs of control characters and whitespace into single spaces
/// and trims both ends.
fn squeeze(text: &str) -> String {
    text.split(|c: char| c <= '\u{20}' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn read_head(path: &Path, limit: usize) -> Option<Vec<u8>> {
    let mut buf = Vec::with_capacity(limit);
    let read = File::open(path).and_then(|file| file.take(limit as u64).read_to_end(&mut buf));
    match read {
        Ok(_) => Some(buf),
        Err(err) => {
            warn(format!("Cannot preview '{}': {}", path.display(), err));
            None
        }
    }
}

/// Printable ASCII from the first [`PREVIEW_READ_LEN`] bytes of a file.
///
/// Only `0x21..=0x7E` and `0x09..=0x0D` survive; whitespace runs collapse
/// to one space.
pub fn preview_binary(path: &Path) -> String {
    let Some(data) = read_head(path, PREVIEW_READ_LEN) else {
        return " ".to_string();
    };
    if data.is_empty() {
        return " ".to_string();
    }

    let kept: String = data
        .iter()
        .filter(|b| (0x21..=0x7E).contains(*b) || (0x09..=0x0D).contains(*b))
        .map(|&b| b as char)
        .collect();

    squeeze(&kept).chars().take(PREVIEW_TRUNC_LEN).collect()
}

/// The first [`PREVIEW_READ_LEN`] characters of a text file on one line.
///
/// Invalid UTF-8 is replaced, never reported.
pub fn preview_text(path: &Path) -> String {
    // Worst case four bytes per character
    let Some(data) = read_head(path, PREVIEW_READ_LEN * 4) else {
        return " ".to_string();
    };
    if data.is_empty() {
        return " ".to_string();
    }

    let decoded = String::from_utf8_lossy(&data);
    let head: String = decoded.chars().take(PREVIEW_READ_LEN).collect();

    squeeze(&head).chars().take(PREVIEW_TRUNC_LEN).collect()
}
