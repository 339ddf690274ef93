//! Semantic colour roles and their terminal escape codes.
//!
//! The tables are process-wide, built on first use and read-only after that.

use crate::columns::Column;
use crate::data::EntryType;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const RESET: &str = "\x1b[0m";

/// What a cell means, independent of the colour used to show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    SrcNameDirectory,
    SrcNameFile,
    TargetName,
    Time,
    SizeFileCount,
    SizeBytes,
    Acls,
    Owner,
    FileType,
    Preview,
    Default,
}

static COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("red", "\x1b[31m"),
        ("magenta", "\x1b[35m"),
        ("light_magenta", "\x1b[95m"),
        ("green", "\x1b[32m"),
        ("light_green", "\x1b[92m"),
        ("light_cyan", "\x1b[96m"),
        ("light_yellow", "\x1b[93m"),
        ("light_gray", "\x1b[37m"),
        ("dark_gray", "\x1b[30m"),
        ("light_red", "\x1b[91m"),
        ("light_blue", "\x1b[94m"),
        ("blue", "\x1b[34m"),
    ])
});

static PALETTE: Lazy<HashMap<ColorRole, &'static str>> = Lazy::new(|| {
    [
        (ColorRole::SrcNameDirectory, "light_red"),
        (ColorRole::SrcNameFile, "light_green"),
        (ColorRole::TargetName, "light_cyan"),
        (ColorRole::Time, "blue"),
        (ColorRole::SizeFileCount, "magenta"),
        (ColorRole::SizeBytes, "green"),
        (ColorRole::Acls, "dark_gray"),
        (ColorRole::Owner, "dark_gray"),
        (ColorRole::FileType, "dark_gray"),
        (ColorRole::Preview, "dark_gray"),
        (ColorRole::Default, "light_magenta"),
    ]
    .into_iter()
    .filter_map(|(role, name)| COLORS.get(name).map(|code| (role, *code)))
    .collect()
});

/// Colour role of a cell. Only the name and size columns depend on the row.
pub fn role_for(column: Column, entry_type: EntryType) -> ColorRole {
    match (column, entry_type) {
        (Column::SrcName, EntryType::Dir) => ColorRole::SrcNameDirectory,
        (Column::SrcName, EntryType::File) => ColorRole::SrcNameFile,
        (Column::Size, EntryType::Dir) => ColorRole::SizeFileCount,
        (Column::Size, EntryType::File) => ColorRole::SizeBytes,
        (Column::TargetName, _) => ColorRole::TargetName,
        (Column::TimeIso, _) => ColorRole::Time,
        (Column::Acls, _) => ColorRole::Acls,
        (Column::Owner, _) => ColorRole::Owner,
        (Column::FileType, _) => ColorRole::FileType,
        (Column::Preview, _) => ColorRole::Preview,
    }
}

/// Escape code for `role`.
pub fn code_for(role: ColorRole) -> &'static str {
    PALETTE
        .get(&role)
        .or_else(|| PALETTE.get(&ColorRole::Default))
        .copied()
        .unwrap_or("")
}

/// Wraps already padded text in the role's colour and a reset.
pub fn paint(text: &str, role: ColorRole) -> String {
    format!("{}{}{}", code_for(role), text, RESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_follow_entry_type() {
        assert_eq!(
            role_for(Column::SrcName, EntryType::Dir),
            ColorRole::SrcNameDirectory
        );
        assert_eq!(
            role_for(Column::SrcName, EntryType::File),
            ColorRole::SrcNameFile
        );
        assert_eq!(
            role_for(Column::Size, EntryType::Dir),
            ColorRole::SizeFileCount
        );
        assert_eq!(role_for(Column::Size, EntryType::File), ColorRole::SizeBytes);
        assert_eq!(
            role_for(Column::TimeIso, EntryType::Dir),
            role_for(Column::TimeIso, EntryType::File)
        );
    }

    #[test]
    fn test_every_role_has_a_code() {
        let roles = [
            ColorRole::SrcNameDirectory,
            ColorRole::SrcNameFile,
            ColorRole::TargetName,
            ColorRole::Time,
            ColorRole::SizeFileCount,
            ColorRole::SizeBytes,
            ColorRole::Acls,
            ColorRole::Owner,
            ColorRole::FileType,
            ColorRole::Preview,
            ColorRole::Default,
        ];
        for role in roles {
            assert!(code_for(role).starts_with("\x1b["), "{:?}", role);
        }
        assert_eq!(code_for(ColorRole::SrcNameDirectory), "\x1b[91m");
        assert_eq!(code_for(ColorRole::Default), "\x1b[95m");
    }

    #[test]
    fn test_paint_wraps_text() {
        assert_eq!(paint("ab ", ColorRole::Time), "\x1b[34mab \x1b[0m");
    }
}
