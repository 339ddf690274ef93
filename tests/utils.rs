use ruls::columns::{RenderRow, Row};
use ruls::data::{EntryInfo, EntryType, StatSnapshot};
use ruls::listing::sort_rows;
use ruls::utils::{absolutize, format_thousands, relative_to};
use std::path::{Path, PathBuf};

#[test]
fn test_format_thousands() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(999), "999");
    assert_eq!(format_thousands(1000), "1,000");
    assert_eq!(format_thousands(1234567), "1,234,567");
    assert_eq!(format_thousands(100000), "100,000");
}

#[test]
fn test_relative_to() {
    let base = Path::new("/home/user/project");

    assert_eq!(
        relative_to(Path::new("/home/user/project/src/main.rs"), base),
        PathBuf::from("src/main.rs")
    );
    assert_eq!(
        relative_to(Path::new("/home/user/other/file"), base),
        PathBuf::from("../other/file")
    );
    assert_eq!(relative_to(base, base), PathBuf::from("."));
    assert_eq!(
        relative_to(Path::new("/etc"), base),
        PathBuf::from("../../../etc")
    );
}

#[test]
fn test_absolutize_is_lexical() {
    assert_eq!(
        absolutize(Path::new("/a/b/../c/./d")),
        PathBuf::from("/a/c/d")
    );
    assert!(absolutize(Path::new("relative")).is_absolute());
}

#[test]
fn test_sort_rows() {
    let make = |name: &str, entry_type| Row {
        info: EntryInfo::new(
            PathBuf::from(name),
            entry_type,
            StatSnapshot::default(),
            None,
        ),
        cells: RenderRow::blank(),
    };

    let mut rows = vec![
        make("zebra.txt", EntryType::File),
        make("Apple.txt", EntryType::File),
        make("src", EntryType::Dir),
        make("Build", EntryType::Dir),
        make("banana.txt", EntryType::File),
    ];
    sort_rows(&mut rows);

    let names: Vec<&str> = rows.iter().map(|r| r.info.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Build", "src", "Apple.txt", "banana.txt", "zebra.txt"]
    );
}
