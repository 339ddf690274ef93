//! Main entry point for the `ruls` CLI application.
//!
//! `ruls` is a replacement for `ls`. It lists the direct children of one
//! directory with size, modification time and symlink targets, and in full
//! mode adds permissions, owner, a content-type tag and a short preview.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Builds and renders the listing via [`listing::list_directory`]
//! - Hands the result to the pager via [`pager::display`]
//!
//! # Flags of Interest
//! - `-f`, `--full`: Show every column
//! - `-g`, `--filter FILTERSTR`: Only list names containing FILTERSTR
//! - `--classifier magic|file`: Content-type oracle
//! - `--no-pager`, `--no-color`: Plain stdout output

use clap::Parser;
use ruls::output::pager::{self, PagerConfig};
use ruls::output::palette::{ColorRole, paint};
use ruls::{Args, ListError, listing, utils};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn report(err: &ListError, color: bool) {
    let message = err.to_string();
    if color && io::stderr().is_terminal() {
        eprintln!("{}", paint(&message, ColorRole::Default));
    } else {
        eprintln!("{}", message);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    utils::set_verbose(args.verbose);

    let blob = match listing::list_directory(&args) {
        Ok(blob) => blob,
        Err(err) => {
            report(&err, !args.no_color);
            return ExitCode::from(err.exit_code());
        }
    };

    if let Err(err) = pager::display(&blob, &PagerConfig::from_args(&args)) {
        eprintln!("Error: {:#}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
