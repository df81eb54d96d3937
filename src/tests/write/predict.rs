// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use futures_lite::io::{empty, Cursor};

use crate::tests::{collect, init_logger};
use crate::{ZipEntryBuilder, Zipper};

#[test]
fn empty_archive() {
    assert_eq!(Zipper::new().predict_size(), 22);
}

#[test]
fn single_owned_file() {
    let mut zipper = Zipper::new();
    zipper.add(ZipEntryBuilder::new("a.txt").data(vec![0; 10])).unwrap();

    assert_eq!(zipper.predict_size(), (30 + 5 + 10) + (46 + 5) + 22);
}

#[test]
fn single_streamed_file() {
    let mut zipper = Zipper::new();
    zipper.add(ZipEntryBuilder::new("a.txt").reader(Cursor::new(vec![0; 10])).size(10)).unwrap();

    assert_eq!(zipper.predict_size(), (30 + 5 + 10 + 16) + (46 + 5) + 22);
}

#[test]
fn large_streamed_file() {
    let size = 0x1_0000_0010;
    let mut zipper = Zipper::new();
    zipper.add(ZipEntryBuilder::new("big.bin").reader(empty()).size(size)).unwrap();

    assert_eq!(zipper.predict_size(), (30 + 7 + 20 + size + 24) + (46 + 7 + 32) + (56 + 20 + 22));
}

#[test]
fn small_file_after_large_offset() {
    let size = 0x1_0000_0000;
    let mut zipper = Zipper::new();
    zipper
        .add(ZipEntryBuilder::new("big.bin").reader(empty()).size(size))
        .unwrap()
        .add(ZipEntryBuilder::new("small.txt").data(vec![0; 4]))
        .unwrap();

    let local = (30 + 7 + 20 + size + 24) + (30 + 9 + 4);
    // The small file's central record needs ZIP64 because of its offset alone.
    let central = (46 + 7 + 32) + (46 + 9 + 32);
    assert_eq!(zipper.predict_size(), local + central + (56 + 20 + 22));
}

#[test]
fn many_entries_force_zip64_trailer_only() {
    let mut zipper = Zipper::new();
    for i in 0..0xFFFE_u32 {
        zipper.add(ZipEntryBuilder::new(format!("{i:05}"))).unwrap();
    }

    let per_entry = (30 + 5) + (46 + 5);
    assert_eq!(zipper.predict_size(), 0xFFFE * per_entry + 22);

    zipper.add(ZipEntryBuilder::new("65535")).unwrap();
    assert_eq!(zipper.predict_size(), 0xFFFF * per_entry + 22 + 56 + 20);
}

#[tokio::test]
async fn prediction_matches_mixed_archive() {
    init_logger();

    let mut zipper = Zipper::new();
    zipper
        .add(ZipEntryBuilder::new("root/"))
        .unwrap()
        .add(ZipEntryBuilder::new("root/nested/"))
        .unwrap()
        .add(ZipEntryBuilder::new("root/empty.txt"))
        .unwrap()
        .add(ZipEntryBuilder::new("root/nested/owned.txt").data(vec![7; 3000]))
        .unwrap()
        .add(ZipEntryBuilder::new("root/nested/streamed.bin").reader(Cursor::new(vec![9; 200_000])).size(200_000))
        .unwrap()
        .add(ZipEntryBuilder::new("root/ünïcode.txt").data(b"unicode".to_vec()))
        .unwrap();

    let predicted = zipper.predict_size();
    let archive = collect(zipper.stream().unwrap()).await.unwrap();

    assert_eq!(archive.len() as u64, predicted);
}
