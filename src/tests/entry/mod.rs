// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use futures_lite::io::Cursor;

use crate::error::{NameViolation, ZipError};
use crate::{ZipEntryBuilder, Zipper, MAX_NAME_LENGTH};

fn rejection(name: &str) -> NameViolation {
    match Zipper::new().add(ZipEntryBuilder::new(name)) {
        Err(ZipError::InvalidEntryName { reason, .. }) => reason,
        other => panic!("expected {name:?} to be rejected, got {other:?}"),
    }
}

#[test]
fn rejects_unsafe_names() {
    assert_eq!(rejection(""), NameViolation::Empty);
    assert_eq!(rejection("."), NameViolation::DotName);
    assert_eq!(rejection(".."), NameViolation::DotName);
    assert_eq!(rejection("/abs/path"), NameViolation::Absolute);
    assert_eq!(rejection("\\abs\\path"), NameViolation::Absolute);
    assert_eq!(rejection("nul\0byte"), NameViolation::ControlCharacter);
    assert_eq!(rejection("tab\there"), NameViolation::ControlCharacter);
    assert_eq!(rejection("../x"), NameViolation::PathTraversal);
    assert_eq!(rejection("a/../x"), NameViolation::PathTraversal);
    assert_eq!(rejection("a/.."), NameViolation::PathTraversal);
}

#[test]
fn rejects_reserved_characters() {
    for character in [':', '*', '?', '<', '>', '|'] {
        assert_eq!(rejection(&format!("bad{character}name")), NameViolation::ReservedCharacter(character));
    }

    assert_eq!(rejection("C:/windows"), NameViolation::ReservedCharacter(':'));
}

#[test]
fn rejects_reserved_device_names() {
    for name in ["COM1", "LPT1", "PRN.txt", "AUX.txt", "NUL.txt", "con", "Lpt9.tar.gz", "docs/CON/readme.md"] {
        assert_eq!(rejection(name), NameViolation::ReservedDeviceName, "{name}");
    }
}

#[test]
fn accepts_near_miss_device_names() {
    let mut zipper = Zipper::new();

    for name in ["COM0", "COM10", "CONSOLE.txt", "auxiliary/", "a.CON", "nul_file"] {
        zipper.add(ZipEntryBuilder::new(name)).unwrap_or_else(|err| panic!("{name:?} was rejected: {err}"));
    }
}

#[test]
fn name_length_limit() {
    let mut zipper = Zipper::new();
    zipper.add(ZipEntryBuilder::new("a".repeat(MAX_NAME_LENGTH))).unwrap();

    assert_eq!(rejection(&"b".repeat(MAX_NAME_LENGTH + 1)), NameViolation::TooLong);

    // Length is measured in encoded bytes, not characters.
    assert_eq!(rejection(&"é".repeat(MAX_NAME_LENGTH / 2 + 1)), NameViolation::TooLong);
}

#[test]
fn rejects_duplicate_names() {
    let mut zipper = Zipper::new();
    zipper.add(ZipEntryBuilder::new("test.txt")).unwrap();
    zipper.add(ZipEntryBuilder::new("TEST.txt")).unwrap();

    let result = zipper.add(ZipEntryBuilder::new("test.txt").data(b"other".to_vec()));
    assert!(matches!(result, Err(ZipError::DuplicateEntryName(name)) if name == "test.txt"));
    assert_eq!(zipper.entries().len(), 2);
}

#[test]
fn directory_content_rules() {
    let mut zipper = Zipper::new();
    zipper.add(ZipEntryBuilder::new("test-dir/")).unwrap();

    for builder in [
        ZipEntryBuilder::new("data/").data(b"abc".to_vec()),
        ZipEntryBuilder::new("empty-data/").data(Vec::new()),
        ZipEntryBuilder::new("sized/").size(0),
        ZipEntryBuilder::new("reader/").reader(Cursor::new(Vec::new())).size(0),
    ] {
        assert!(matches!(zipper.add(builder), Err(ZipError::InvalidEntryContent(_))));
    }

    let entry = &zipper.entries()[0];
    assert!(entry.dir());
    assert_eq!(entry.size(), 0);
    assert_eq!(entry.unix_permissions(), 0o755);
    assert_eq!(entry.external_file_attribute(), (0o040755 << 16) | 0x10);
}

#[test]
fn file_content_rules() {
    let mut zipper = Zipper::new();

    zipper
        .add(ZipEntryBuilder::new("empty.txt"))
        .unwrap()
        .add(ZipEntryBuilder::new("owned.txt").data(vec![0x41; 1024]))
        .unwrap()
        .add(ZipEntryBuilder::new("streamed.txt").reader(Cursor::new(vec![0; 16])).size(16))
        .unwrap();

    let invalid = [
        ZipEntryBuilder::new("a").data(vec![1]).size(1),
        ZipEntryBuilder::new("b").reader(Cursor::new(vec![1])),
        ZipEntryBuilder::new("c").size(1),
        ZipEntryBuilder::new("d").data(vec![1]).reader(Cursor::new(vec![1])).size(1),
    ];
    for builder in invalid {
        assert!(matches!(zipper.add(builder), Err(ZipError::InvalidEntryContent(_))));
    }

    let entries = zipper.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!((entries[0].size(), entries[0].streamed()), (0, false));
    assert_eq!((entries[1].size(), entries[1].streamed()), (1024, false));
    assert_eq!((entries[2].size(), entries[2].streamed()), (16, true));
    assert!(entries.iter().all(|entry| !entry.dir()));
}

#[test]
fn entry_metadata() {
    let mut zipper = Zipper::new();
    zipper.add(ZipEntryBuilder::new("bin/tool").data(b"#!".to_vec()).unix_permissions(0o755).readonly(true)).unwrap();
    zipper.add(ZipEntryBuilder::new("ünïcode.txt")).unwrap();

    let tool = &zipper.entries()[0];
    assert_eq!(tool.filename(), "bin/tool");
    assert_eq!(tool.unix_permissions(), 0o555);
    assert!(tool.readonly());
    assert_eq!(tool.external_file_attribute(), (0o100555 << 16) | 0x21);
    assert!(tool.last_modification_date().is_none());
    assert!(!tool.general_purpose_flag().filename_unicode);

    let unicode = &zipper.entries()[1];
    assert_eq!(unicode.unix_permissions(), 0o644);
    assert!(unicode.general_purpose_flag().filename_unicode);
}
