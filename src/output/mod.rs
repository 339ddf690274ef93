//! Output side of a listing.
//!
//! # Modules
//!
//! - [`terminal`]: column widths, padding and row assembly
//! - [`palette`]: semantic colour roles and escape codes
//! - [`pager`]: hands the finished text to `less` (or stdout)

pub mod pager;
pub mod palette;
pub mod terminal;

/// Terminal table renderer.
///
/// See [`terminal::render_rows`] for full documentation.
pub use terminal::render_rows;

/// Pager hand-off.
///
/// See [`pager::display`] for full documentation.
pub use pager::display;
