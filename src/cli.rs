//! CLI interface definitions for the `ruls` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`ClassifierKind`]: which content-type oracle to use
//!
//! `Args` is the only configuration source; the pager command can also come
//! from the `RULS_PAGER` environment variable.
//!
//! # Example
//!
//! ```bash
//! ruls --full --filter .rs src
//! ```

use crate::classify::{FileCommand, MagicSniffer, MimeOracle};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for `ruls`.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use ruls::Args;
///
/// let args = Args::parse_from(["ruls", "--full", "-g", "log", "/var"]);
/// assert!(args.full);
/// assert_eq!(args.filter.as_deref(), Some("log"));
/// ```
#[derive(Parser, Debug)]
#[command(name = "ruls", version, about = "Replacement for ls")]
pub struct Args {
    /// Starting path (defaults to current directory)
    #[arg(value_name = "STARTPATH", default_value = ".")]
    pub path: PathBuf,

    /// Full output: permissions, owner, content type and preview columns
    #[arg(short = 'f', long, default_value_t = false)]
    pub full: bool,

    /// Only list entries whose name contains FILTERSTR
    #[arg(short = 'g', long = "filter", value_name = "FILTERSTR")]
    pub filter: Option<String>,

    /// How to detect file content types in full mode
    #[arg(long, value_enum, default_value_t = ClassifierKind::Magic)]
    pub classifier: ClassifierKind,

    /// Pager command line (default: less -R with quit-if-one-screen)
    #[arg(long, value_name = "CMD", env = "RULS_PAGER")]
    pub pager: Option<String>,

    /// Write the listing to stdout instead of a pager
    #[arg(long, default_value_t = false)]
    pub no_pager: bool,

    /// Disable colour escape codes
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Print diagnostics for entries that could not be fully inspected
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Content-type oracle selection.
///
/// # Variants
/// * `Magic` - In-process signature sniffing (no subprocesses)
/// * `File` - Spawn `file --mime --dereference` for every file
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum ClassifierKind {
    Magic,
    File,
}

impl ClassifierKind {
    pub fn oracle(&self) -> Box<dyn MimeOracle> {
        match self {
            ClassifierKind::Magic => Box::new(MagicSniffer),
            ClassifierKind::File => Box::new(FileCommand::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["ruls"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert!(!args.full);
        assert!(args.filter.is_none());
        assert_eq!(args.classifier, ClassifierKind::Magic);
        assert!(!args.no_pager);
        assert!(!args.no_color);
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "ruls",
            "-f",
            "--filter",
            "abc",
            "--classifier",
            "file",
            "--no-pager",
            "--no-color",
            "some/dir",
        ]);
        assert!(args.full);
        assert_eq!(args.filter.as_deref(), Some("abc"));
        assert_eq!(args.classifier, ClassifierKind::File);
        assert!(args.no_pager);
        assert!(args.no_color);
        assert_eq!(args.path, PathBuf::from("some/dir"));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
