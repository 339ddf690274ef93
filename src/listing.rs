//! The listing pipeline: scan, build rows, sort, render.
//!
//! Building and rendering are separate phases. [`build_rows`] materialises
//! every row before anything is rendered, because column widths depend on
//! the complete row set.

use crate::cli::Args;
use crate::columns::{Row, RowContext, build_row};
use crate::data::{ContentCategory, EntryInfo, EntryType};
use crate::errors::ListError;
use crate::inspect::inspect_entry;
use crate::output::terminal::{RenderOptions, render_rows, wrap_blob};
use crate::scan::scan_entries;
use crate::utils::warn;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

/// Listings larger than this show a progress bar while rows are built.
const PROGRESS_THRESHOLD: usize = 256;

/// Sort key: directories first, then trimmed, lowercased name.
pub fn sort_key(row: &Row) -> (EntryType, String) {
    (row.info.entry_type, row.info.name.trim().to_lowercase())
}

/// Sorts rows in place. The sort is stable, so rows with equal keys keep
/// their scan order.
pub fn sort_rows(rows: &mut [Row]) {
    rows.sort_by_cached_key(sort_key);
}

fn progress_bar(len: usize) -> ProgressBar {
    if len <= PROGRESS_THRESHOLD {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    match ProgressStyle::default_bar()
        .template("{spinner} Inspecting entries... {pos}/{len} [{elapsed}]")
    {
        Ok(style) => pb.set_style(style),
        Err(err) => warn(format!("Failed to set progress template: {}", err)),
    }
    pb
}

/// Notes entries whose content could not be determined.
fn report_degraded(info: &EntryInfo) {
    if let Some(category @ (ContentCategory::NotReadable | ContentCategory::Unknown)) =
        info.cached_category()
    {
        warn(format!(
            "{} '{}' is {}",
            info.entry_type.as_str(),
            info.name,
            category.as_str()
        ));
    }
}

/// Inspects every path and renders its cells. Entries that disappear
/// between scanning and inspection are skipped.
pub fn build_rows(paths: &[PathBuf], ctx: &RowContext) -> Vec<Row> {
    let pb = progress_bar(paths.len());
    let mut rows = Vec::with_capacity(paths.len());

    for path in paths {
        match inspect_entry(path) {
            Ok(info) => {
                let row = build_row(info, ctx);
                report_degraded(&row.info);
                rows.push(row);
            }
            Err(err) => warn(format!("Skipping '{}': {}", path.display(), err)),
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    rows
}

/// Phase one: scan `start` and build the sorted row set.
pub fn collect_rows(
    start: &Path,
    filter: Option<&str>,
    ctx: &RowContext,
) -> Result<Vec<Row>, ListError> {
    let paths = scan_entries(start, filter)?;
    let mut rows = build_rows(&paths, ctx);
    sort_rows(&mut rows);
    Ok(rows)
}

/// Phase two: the complete text handed to the pager.
pub fn render_listing(rows: &[Row], opts: &RenderOptions) -> String {
    wrap_blob(&render_rows(rows, opts))
}

/// Runs the whole pipeline for the given arguments.
///
/// Colour is on unless `--no-color` is given; it is also dropped when
/// stdout is not a terminal and no pager was requested.
pub fn list_directory(args: &Args) -> Result<String, ListError> {
    let oracle = args.classifier.oracle();
    let ctx = RowContext {
        full: args.full,
        oracle: oracle.as_ref(),
    };
    let rows = collect_rows(&args.path, args.filter.as_deref(), &ctx)?;

    let color = !args.no_color && (io::stdout().is_terminal() || !args.no_pager);
    let opts = RenderOptions {
        full: args.full,
        color,
    };
    Ok(render_listing(&rows, &opts))
}
