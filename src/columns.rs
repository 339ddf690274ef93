//! The fixed column catalog and per-entry cell rules.
//!
//! [`Column`] is a closed set; catalog order is display order. A [`Row`]
//! pairs an [`EntryInfo`] with its [`RenderRow`], one unpadded string per
//! column. Columns marked full-only hold a single space in compact mode and
//! their rule is never run, so compact listings never classify or preview.

use crate::classify::MimeOracle;
use crate::data::EntryInfo;
use crate::preview::preview_for;
use crate::utils::{access_digit, format_thousands, group_name, owner_name, warn};
use chrono::{DateTime, Local};
use std::fs;
use std::ops::Index;

/// Placeholder for cells with nothing to show.
pub const BLANK: &str = " ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Renderable columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Acls,
    Owner,
    FileType,
    Size,
    TimeIso,
    SrcName,
    TargetName,
    Preview,
}

impl Column {
    pub const COUNT: usize = 8;

    pub const ALL: [Column; Column::COUNT] = [
        Column::Acls,
        Column::Owner,
        Column::FileType,
        Column::Size,
        Column::TimeIso,
        Column::SrcName,
        Column::TargetName,
        Column::Preview,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Column::Acls => "acls",
            Column::Owner => "owner",
            Column::FileType => "filetype",
            Column::Size => "size",
            Column::TimeIso => "timeiso",
            Column::SrcName => "srcname",
            Column::TargetName => "targetname",
            Column::Preview => "preview",
        }
    }

    pub fn align(&self) -> Align {
        match self {
            Column::Size => Align::Right,
            _ => Align::Left,
        }
    }

    /// Whether the column is only computed and shown in full mode.
    pub fn only_full(&self) -> bool {
        matches!(
            self,
            Column::Acls | Column::Owner | Column::FileType | Column::Preview
        )
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Columns shown for the given mode, in display order.
    pub fn displayed(full: bool) -> impl Iterator<Item = Column> {
        Column::ALL
            .into_iter()
            .filter(move |column| full || !column.only_full())
    }

    /// Produces the unpadded cell text for `entry`.
    pub fn render(&self, entry: &EntryInfo, ctx: &RowContext) -> String {
        match self {
            Column::Acls => format!(
                "{:03o} {}",
                entry.stat.mode & 0o777,
                access_digit(&entry.path)
            ),
            Column::Owner => format!(
                "{}:{}",
                owner_name(entry.stat.uid),
                group_name(entry.stat.gid)
            ),
            Column::FileType => entry.content_category(ctx.oracle).type_tag().to_string(),
            Column::Size => render_size(entry),
            Column::TimeIso => render_time(entry),
            Column::SrcName => with_dir_suffix(&entry.name, entry.is_dir()),
            Column::TargetName => match &entry.link {
                Some(target) => with_dir_suffix(&target.display, target.is_dir),
                None => BLANK.to_string(),
            },
            Column::Preview => preview_for(entry, entry.content_category(ctx.oracle)),
        }
    }
}

fn with_dir_suffix(name: &str, is_dir: bool) -> String {
    if is_dir {
        format!("{}/", name)
    } else {
        name.to_string()
    }
}

/// Child count for directories (`-` when unreadable), byte size otherwise.
fn render_size(entry: &EntryInfo) -> String {
    if !entry.is_dir() {
        return format_thousands(entry.stat.size);
    }
    match fs::read_dir(entry.real_path()) {
        Ok(read_dir) => read_dir.count().to_string(),
        Err(err) => {
            warn(format!("Cannot count '{}': {}", entry.name, err));
            "-".to_string()
        }
    }
}

fn render_time(entry: &EntryInfo) -> String {
    let nanos = u32::try_from(entry.stat.mtime_nsec).unwrap_or(0);
    match DateTime::from_timestamp(entry.stat.mtime, nanos) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "-".to_string(),
    }
}

/// What the cell rules need besides the entry itself.
pub struct RowContext<'a> {
    pub full: bool,
    pub oracle: &'a dyn MimeOracle,
}

/// One rendered, unpadded cell per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    cells: [String; Column::COUNT],
}

impl RenderRow {
    pub fn new(cells: [String; Column::COUNT]) -> Self {
        Self { cells }
    }

    /// A row where every cell is blank.
    pub fn blank() -> Self {
        Self::new(std::array::from_fn(|_| BLANK.to_string()))
    }

    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        self.cells[column.index()] = value.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Column, &str)> {
        Column::ALL
            .into_iter()
            .zip(self.cells.iter().map(String::as_str))
    }
}

impl Index<Column> for RenderRow {
    type Output = str;

    fn index(&self, column: Column) -> &str {
        &self.cells[column.index()]
    }
}

/// An entry together with its rendered cells.
#[derive(Debug, Clone)]
pub struct Row {
    pub info: EntryInfo,
    pub cells: RenderRow,
}

/// Renders every column of `info` that the current mode needs.
pub fn build_row(info: EntryInfo, ctx: &RowContext) -> Row {
    let cells = std::array::from_fn(|idx| {
        let column = Column::ALL[idx];
        if column.only_full() && !ctx.full {
            BLANK.to_string()
        } else {
            column.render(&info, ctx)
        }
    });
    Row {
        info,
        cells: RenderRow::new(cells),
    }
}
