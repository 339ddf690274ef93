//! Library crate for ruls
//!
//! This exposes the modules behind the `ruls` binary for testing and
//! library usage.
//!
//! # Features
//!
//! - **Directory Listing**: One row per direct child, directories first
//! - **Content Classification**: Coarse content categories through a pluggable MIME oracle
//! - **Previews**: Text heads, printable runs from binaries, child names for directories
//! - **Aligned Output**: Width-measured, colourised columns handed to a pager
//!
//! # Modules
//!
//! - [`data`]: Core data structures (`EntryInfo`, `EntryType`, `ContentCategory`)
//! - [`cli`]: Command-line interface definitions
//! - [`scan`]: Lists the children of the start directory
//! - [`inspect`]: Per-entry metadata and symlink resolution
//! - [`classify`]: MIME oracles and category mapping
//! - [`preview`]: Preview extraction
//! - [`columns`]: Column catalog and cell rules
//! - [`listing`]: The build/sort/render pipeline
//! - [`output`]: Terminal rendering, palette and pager
//! - [`errors`]: Fatal listing errors
//! - [`utils`]: Formatting, path and account helpers

pub mod classify;
pub mod cli;
pub mod columns;
pub mod data;
pub mod errors;
pub mod inspect;
pub mod listing;
pub mod output;
pub mod preview;
pub mod scan;
pub mod utils;

pub use classify::{FileCommand, MagicSniffer, MimeOracle};
pub use cli::Args;
pub use columns::{Column, Row, RowContext};
pub use data::{ContentCategory, EntryInfo, EntryType};
pub use errors::ListError;
pub use listing::{collect_rows, list_directory};
