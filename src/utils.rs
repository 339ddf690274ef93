//! Utility functions for the `ruls` listing tool.
//!
//! This module provides:
//! - Verbose diagnostics toggled once at startup
//! - Owner and group name resolution via `libc::getpwuid_r` / `getgrgid_r`
//! - Caller access checks via `libc::access`
//! - Lexical path helpers (working-directory relative display)
//! - Thousands-separated number formatting
//!
//! All functions are Unix-only, like the rest of the crate.

use libc::{c_char, getgrgid_r, getpwuid_r, group, passwd};
use std::collections::HashMap;
use std::env;
use std::ffi::{CStr, CString};
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

// Set once from the CLI, read everywhere diagnostics are emitted
static VERBOSE: AtomicBool = AtomicBool::new(false);

static USER_CACHE: std::sync::LazyLock<Mutex<HashMap<u32, String>>> =
    std::sync::LazyLock::new(|| Mutex::new(HashMap::new()));

static GROUP_CACHE: std::sync::LazyLock<Mutex<HashMap<u32, String>>> =
    std::sync::LazyLock::new(|| Mutex::new(HashMap::new()));

/// Enables or disables diagnostic output on stderr.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Prints a diagnostic line to stderr when `--verbose` is active.
pub fn warn(message: impl AsRef<str>) {
    if is_verbose() {
        eprintln!("Warning: {}", message.as_ref());
    }
}

/// Formats an integer with `,` as the thousands separator.
///
/// ```rust
/// assert_eq!(ruls::utils::format_thousands(1234567), "1,234,567");
/// ```
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Makes `path` absolute against the working directory and removes `.` and
/// `..` components lexically, without touching the filesystem.
pub fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Expresses `path` relative to `base`. Both are expected to be absolute and
/// normalized; the result is `.` when they are equal.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path_parts: Vec<Component> = path.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..base_parts.len() {
        out.push("..");
    }
    for part in &path_parts[common..] {
        out.push(part.as_os_str());
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}

/// Display form of `path` relative to the working directory.
pub fn relative_display(path: &Path) -> String {
    match env::current_dir() {
        Ok(cwd) => relative_to(&absolutize(path), &absolutize(&cwd))
            .to_string_lossy()
            .into_owned(),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}

fn access_ok(path: &Path, mode: libc::c_int) -> bool {
    let c_path = match CString::new(path.as_os_str().as_bytes()) {
        Ok(p) => p,
        Err(_) => return false,
    };
    unsafe { libc::access(c_path.as_ptr(), mode) == 0 }
}

/// Whether the calling user may read `path` (symlinks are followed).
pub fn is_readable(path: &Path) -> bool {
    access_ok(path, libc::R_OK)
}

/// The caller's effective access to `path` as a single octal digit
/// (read 4, write 2, execute 1).
pub fn access_digit(path: &Path) -> u32 {
    const BITS: [(libc::c_int, u32); 3] = [(libc::R_OK, 4), (libc::W_OK, 2), (libc::X_OK, 1)];
    BITS.iter()
        .filter(|(mode, _)| access_ok(path, *mode))
        .fold(0u32, |acc, (_, bit)| acc | *bit)
}

fn lookup_user(uid: u32) -> Option<String> {
    let mut pwd = MaybeUninit::<passwd>::uninit();
    let mut buf = [0u8; 4096];
    let mut result: *mut passwd = std::ptr::null_mut();

    let ret = unsafe {
        getpwuid_r(
            uid,
            pwd.as_mut_ptr(),
            buf.as_mut_ptr() as *mut c_char,
            buf.len(),
            &mut result,
        )
    };
    if ret != 0 || result.is_null() {
        return None;
    }

    unsafe {
        let name = (*result).pw_name;
        if name.is_null() {
            return None;
        }
        CStr::from_ptr(name).to_str().ok().map(String::from)
    }
}

fn lookup_group(gid: u32) -> Option<String> {
    let mut grp = MaybeUninit::<group>::uninit();
    let mut buf = [0u8; 4096];
    let mut result: *mut group = std::ptr::null_mut();

    let ret = unsafe {
        getgrgid_r(
            gid,
            grp.as_mut_ptr(),
            buf.as_mut_ptr() as *mut c_char,
            buf.len(),
            &mut result,
        )
    };
    if ret != 0 || result.is_null() {
        return None;
    }

    unsafe {
        let name = (*result).gr_name;
        if name.is_null() {
            return None;
        }
        CStr::from_ptr(name).to_str().ok().map(String::from)
    }
}

fn cached_name(
    cache: &Mutex<HashMap<u32, String>>,
    id: u32,
    lookup: fn(u32) -> Option<String>,
    kind: &str,
) -> String {
    if let Ok(cache) = cache.lock() {
        if let Some(name) = cache.get(&id) {
            return name.clone();
        }
    }

    let name = lookup(id).unwrap_or_else(|| {
        warn(format!("Failed to resolve {} name for id {}", kind, id));
        id.to_string()
    });

    if let Ok(mut cache) = cache.lock() {
        cache.insert(id, name.clone());
    }
    name
}

/// Username for `uid`, or the numeric id when it cannot be resolved.
pub fn owner_name(uid: u32) -> String {
    cached_name(&USER_CACHE, uid, lookup_user, "user")
}

/// Group name for `gid`, or the numeric id when it cannot be resolved.
pub fn group_name(gid: u32) -> String {
    cached_name(&GROUP_CACHE, gid, lookup_group, "group")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands_small() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(10), "10");
        assert_eq!(format_thousands(999), "999");
    }

    #[test]
    fn test_format_thousands_groups() {
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(123456), "123,456");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_relative_to_sibling_and_child() {
        let base = Path::new("/home/user/project");
        assert_eq!(
            relative_to(Path::new("/home/user/project/src"), base),
            PathBuf::from("src")
        );
        assert_eq!(
            relative_to(Path::new("/home/user/other/file"), base),
            PathBuf::from("../other/file")
        );
        assert_eq!(relative_to(base, base), PathBuf::from("."));
    }

    #[test]
    fn test_absolutize_removes_dots() {
        let abs = absolutize(Path::new("/a/./b/../c"));
        assert_eq!(abs, PathBuf::from("/a/c"));
    }

    #[test]
    fn test_unknown_ids_fall_back_to_numbers() {
        // Ids this high are not allocated on any sane test machine
        assert_eq!(owner_name(4_000_000_000), "4000000000");
        assert_eq!(group_name(4_000_000_001), "4000000001");
    }
}
