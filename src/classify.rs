//! Content classification for regular files.
//!
//! A [`MimeOracle`] answers with `file --mime` style text
//! (`<path>: <type>/<subtype>; charset=<..>`) and [`category_from_mime`]
//! turns that answer into a [`ContentCategory`]. Two oracles exist:
//!
//! - [`MagicSniffer`]: in-process signature matching via the `infer` crate,
//!   with a UTF-8 heuristic for text (the default)
//! - [`FileCommand`]: spawns the external `file` utility once per file
//!
//! Both feed the same token rules, so switching oracles never changes how an
//! answer maps to a category.

use crate::data::ContentCategory;
use crate::utils::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};

/// Bytes read by [`MagicSniffer`] before matching signatures.
const SNIFF_LEN: u64 = 8192;

/// Signatures long enough to win over the text heuristic.
const TEXTUAL_SIGNATURES: &[&[u8]] = &[b"%PDF-", b"%!PS-Adobe", b"{\\rtf"];

static TEXT_TOKEN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z]text[^a-zA-Z]").ok());

static EXEC_TOKEN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z]x-(executable|sharedlib)[^a-zA-Z]").ok());

fn has_token(pattern: &Lazy<Option<Regex>>, answer: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(answer))
}

/// Anything that can describe a file's type as `file --mime` text.
pub trait MimeOracle {
    /// Returns the oracle's raw answer, or `None` when it produced nothing.
    fn sniff(&self, path: &Path) -> Option<String>;
}

/// Maps an oracle answer to `Text`, `BinaryExecutable` or `BinaryOther`.
///
/// Tokens must be surrounded by non-alphabetic characters on both sides.
/// Returns `None` when the answer carries no MIME type at all (for example
/// an error message printed in place of a type).
pub fn category_from_mime(answer: &str) -> Option<ContentCategory> {
    if has_token(&TEXT_TOKEN, answer) {
        return Some(ContentCategory::Text);
    }
    if has_token(&EXEC_TOKEN, answer) {
        return Some(ContentCategory::BinaryExecutable);
    }
    if answer.contains('/') {
        return Some(ContentCategory::BinaryOther);
    }
    None
}

/// Classifies a readable, non-empty, non-directory file.
///
/// Oracle silence yields `Unknown`. An answer without any `type/subtype`
/// (such as `x: cannot open`) yields `Other` rather than `BinaryOther`, so
/// oracle error text never gets a binary preview. Neither is an error.
pub fn classify(path: &Path, oracle: &dyn MimeOracle) -> ContentCategory {
    let Some(answer) = oracle.sniff(path) else {
        return ContentCategory::Unknown;
    };

    // The echoed path must not take part in token matching
    let echoed = path.to_string_lossy();
    let verdict = answer.strip_prefix(echoed.as_ref()).unwrap_or(&answer);

    category_from_mime(verdict).unwrap_or(ContentCategory::Other)
}

/// Runs `file --mime --dereference <path>` and returns its stdout.
#[derive(Debug, Clone)]
pub struct FileCommand {
    program: String,
}

impl FileCommand {
    pub fn new() -> Self {
        Self::with_program("file")
    }

    /// Uses `program` in place of `file`; it receives the same arguments.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for FileCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl MimeOracle for FileCommand {
    fn sniff(&self, path: &Path) -> Option<String> {
        let output = match Command::new(&self.program)
            .arg("--mime")
            .arg("--dereference")
            .arg(path)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(err) => {
                static FIRST_WARN: std::sync::Once = std::sync::Once::new();
                FIRST_WARN.call_once(|| {
                    warn(format!(
                        "Could not run '{}' ({}). Content types will show as unknown.",
                        self.program, err
                    ));
                });
                return None;
            }
        };

        if output.stdout.is_empty() {
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// In-process sniffer built on `infer` signatures.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagicSniffer;

impl MagicSniffer {
    fn looks_like_text(buf: &[u8]) -> bool {
        if buf.contains(&0) {
            return false;
        }
        match std::str::from_utf8(buf) {
            Ok(_) => true,
            // A multi-byte character cut off by the read limit is still text
            Err(err) => err.error_len().is_none(),
        }
    }

    fn describe(buf: &[u8]) -> (&'static str, &'static str) {
        if buf.is_empty() {
            return ("inode/x-empty", "binary");
        }
        let kind = infer::get(buf);
        if Self::looks_like_text(buf) {
            let charset = if buf.is_ascii() { "us-ascii" } else { "utf-8" };
            // Short binary signatures (`BM`, `MZ`, `ID3`) also start plain prose
            return match kind {
                Some(kind) if Self::trusted_for_text(buf, &kind) => {
                    (kind.mime_type(), charset)
                }
                _ => ("text/plain", charset),
            };
        }
        match kind {
            Some(kind) => (kind.mime_type(), "binary"),
            None => ("application/octet-stream", "binary"),
        }
    }

    /// Whether a signature match on a text-looking buffer is believable.
    fn trusted_for_text(buf: &[u8], kind: &infer::Type) -> bool {
        kind.matcher_type() == infer::MatcherType::Text
            || TEXTUAL_SIGNATURES.iter().any(|sig| buf.starts_with(sig))
    }
}

impl MimeOracle for MagicSniffer {
    fn sniff(&self, path: &Path) -> Option<String> {
        let mut buf = Vec::new();
        let read = File::open(path).and_then(|file| file.take(SNIFF_LEN).read_to_end(&mut buf));
        if let Err(err) = read {
            warn(format!("Could not sniff '{}': {}", path.display(), err));
            return None;
        }

        let (mime, charset) = Self::describe(&buf);
        Some(format!("{}: {}; charset={}\n", path.display(), mime, charset))
    }
}
