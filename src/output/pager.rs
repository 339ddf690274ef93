//! Hands the rendered listing to a pager.
//!
//! The pager receives the whole blob on stdin and owns the terminal until
//! the user quits. While it runs, `ruls` ignores SIGINT so an interrupt only
//! reaches the pager. Without a usable pager the blob goes straight to
//! stdout.

use crate::cli::Args;
use crate::utils::warn;
use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Write};
use std::process::{Command, Stdio};

/// Pager command used when none is configured.
pub const DEFAULT_PAGER: &[&str] = &[
    "less",
    "--RAW-CONTROL-CHARS",
    "--quit-at-eof",
    "--quit-if-one-screen",
    "--no-init",
];

/// How (and whether) to page output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerConfig {
    pub enabled: bool,
    /// Whitespace-separated command line; `None` selects [`DEFAULT_PAGER`].
    pub command: Option<String>,
}

impl PagerConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            enabled: !args.no_pager,
            command: args.pager.clone(),
        }
    }

    /// Program and arguments to spawn.
    pub fn argv(&self) -> Vec<String> {
        match self.command.as_deref().map(str::trim) {
            Some(command) if !command.is_empty() => {
                command.split_whitespace().map(String::from).collect()
            }
            _ => DEFAULT_PAGER.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Restores the previous SIGINT disposition when dropped.
struct InterruptGuard {
    previous: libc::sighandler_t,
}

impl InterruptGuard {
    fn ignore() -> Self {
        let previous = unsafe { libc::signal(libc::SIGINT, libc::SIG_IGN) };
        Self { previous }
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        unsafe {
            libc::signal(libc::SIGINT, self.previous);
        }
    }
}

/// Writes `blob` to stdout, treating a closed pipe as success.
pub fn write_stdout(blob: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    match out.write_all(blob.as_bytes()).and_then(|_| out.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("Failed to write listing to stdout"),
    }
}

/// Shows `blob` through the configured pager.
///
/// Falls back to [`write_stdout`] when paging is disabled, stdout is not a
/// terminal, or the pager cannot be started.
pub fn display(blob: &str, config: &PagerConfig) -> Result<()> {
    if !config.enabled || !io::stdout().is_terminal() {
        return write_stdout(blob);
    }

    let argv = config.argv();
    let Some((program, rest)) = argv.split_first() else {
        return write_stdout(blob);
    };

    let mut child = match Command::new(program)
        .args(rest)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(err) => {
            warn(format!("Could not start pager '{}': {}", program, err));
            return write_stdout(blob);
        }
    };

    // The pager already has its own signal handlers; only this process ignores ^C
    let _guard = InterruptGuard::ignore();

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(err) = stdin.write_all(blob.as_bytes()) {
            // The user quit before reading everything
            if err.kind() != io::ErrorKind::BrokenPipe {
                let _ = child.wait();
                return Err(err).context("Failed to write listing to pager");
            }
        }
    }

    child.wait().context("Failed to wait for pager")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_argv() {
        let config = PagerConfig {
            enabled: true,
            command: None,
        };
        assert_eq!(
            config.argv(),
            vec![
                "less",
                "--RAW-CONTROL-CHARS",
                "--quit-at-eof",
                "--quit-if-one-screen",
                "--no-init"
            ]
        );
    }

    #[test]
    fn test_custom_argv() {
        let config = PagerConfig {
            enabled: true,
            command: Some("  more -d ".to_string()),
        };
        assert_eq!(config.argv(), vec!["more", "-d"]);

        let blank = PagerConfig {
            enabled: true,
            command: Some("   ".to_string()),
        };
        assert_eq!(blank.argv()[0], "less");
    }
}
