// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::zip64::extra::Zip64ExtendedInformationExtraField;
use crate::entry::ZipEntry;
use crate::spec::consts::NON_ZIP64_MAX_SIZE;
use crate::write::{layout, record};
use crate::{ZipEntryBuilder, Zipper};

fn entry(builder: ZipEntryBuilder) -> ZipEntry {
    let mut zipper = Zipper::new();
    zipper.add(builder).unwrap();
    zipper.entries()[0].clone()
}

fn streamed(name: &str, size: u64) -> ZipEntry {
    entry(ZipEntryBuilder::new(name).reader(futures_lite::io::empty()).size(size))
}

#[test]
fn thresholds() {
    assert!(!layout::exceeds_u32(NON_ZIP64_MAX_SIZE - 1));
    assert!(layout::exceeds_u32(NON_ZIP64_MAX_SIZE));

    assert!(!layout::trailer_needs_zip64(0xFFFE, 0, 0, false));
    assert!(layout::trailer_needs_zip64(0xFFFF, 0, 0, false));
    assert!(layout::trailer_needs_zip64(1, NON_ZIP64_MAX_SIZE, 0, false));
    assert!(layout::trailer_needs_zip64(1, 0, NON_ZIP64_MAX_SIZE, false));
    assert!(layout::trailer_needs_zip64(1, 0, 0, true));
}

#[test]
fn record_lengths_match_built_records() {
    let small = streamed("small.bin", 10);
    let large = streamed("large.bin", 0x1_0000_0010);

    for entry in [&small, &large] {
        let header = record::local_file_header(entry, 0).unwrap();
        assert_eq!(header.byte_len() as u64, layout::local_header_len(entry));

        let descriptor = record::data_descriptor(entry, 0).unwrap();
        assert_eq!(descriptor.byte_len() as u64, layout::data_descriptor_len(entry));

        for offset in [0, NON_ZIP64_MAX_SIZE] {
            let cdr = record::central_directory_record(entry, 0, offset).unwrap();
            assert_eq!(cdr.byte_len() as u64, layout::central_header_len(entry, offset));
        }
    }

    assert_eq!(layout::local_header_len(&small), 30 + 9);
    assert_eq!(layout::local_header_len(&large), 30 + 9 + 20);
    assert_eq!(layout::data_descriptor_len(&small), 16);
    assert_eq!(layout::data_descriptor_len(&large), 24);
    assert_eq!(layout::central_header_len(&small, 0), 46 + 9);
    assert_eq!(layout::central_header_len(&large, 0), 46 + 9 + 32);

    assert_eq!(record::trailer(1, 0, 0, false).unwrap().len() as u64, layout::trailer_len(false));
    assert_eq!(record::trailer(1, 0, 0, true).unwrap().len() as u64, layout::trailer_len(true));
    assert_eq!(layout::trailer_len(true), 22 + 56 + 20);
}

#[test]
fn owned_entries_have_no_data_descriptor() {
    let owned = entry(ZipEntryBuilder::new("a.txt").data(b"abc".to_vec()));
    assert_eq!(layout::data_descriptor_len(&owned), 0);
}

#[test]
fn large_offset_escalates_central_record_only() {
    let small = entry(ZipEntryBuilder::new("after.txt").data(b"abc".to_vec()));
    let offset = 0x1_0000_0000;

    assert_eq!(layout::local_header_len(&small), 30 + 9);
    assert!(layout::central_needs_zip64(&small, offset));

    let cdr = record::central_directory_record(&small, 0x1234, offset).unwrap();
    assert_eq!(cdr.relative_offset_of_local_header, 0xFFFFFFFF);
    assert_eq!(cdr.compressed_size, 0xFFFFFFFF);
    assert_eq!(cdr.uncompressed_size, 0xFFFFFFFF);
    assert_eq!(cdr.disk_number_start, 0xFFFF);
    assert_eq!(cdr.version_needed_to_extract, 45);

    let field = Zip64ExtendedInformationExtraField::find(&cdr.extra_field).unwrap().unwrap();
    assert_eq!(field.uncompressed_size, 3);
    assert_eq!(field.compressed_size, 3);
    assert_eq!(field.relative_header_offset, Some(offset));
    assert_eq!(field.disk_start_number, Some(0));
}

#[test]
fn streamed_zip64_local_header_defers_sizes() {
    let large = streamed("large.bin", 0x1_0000_0010);
    let header = record::local_file_header(&large, 0).unwrap();

    assert_eq!(header.crc_32, 0);
    assert_eq!(header.compressed_size, 0xFFFFFFFF);
    assert_eq!(header.uncompressed_size, 0xFFFFFFFF);
    assert_eq!(header.version_needed_to_extract, 45);
    assert_eq!(header.general_purpose_flag & 0x8, 0x8);

    let field = Zip64ExtendedInformationExtraField::find(&header.extra_field).unwrap().unwrap();
    assert_eq!((field.uncompressed_size, field.compressed_size), (0, 0));
    assert_eq!(field.relative_header_offset, None);
}

#[test]
fn zip64_trailer_uses_sentinels() {
    let trailer = record::trailer(70_000, 0x10, 0x20, true).unwrap();
    let mut reader = trailer.as_slice();

    let zip64_eocdr = crate::core::zip64::eocdr::read(&mut reader).unwrap();
    assert_eq!(zip64_eocdr.total_entries_in_cd, 70_000);
    assert_eq!(zip64_eocdr.offset_start_of_cd, 0x10);
    assert_eq!(zip64_eocdr.size_of_cd, 0x20);

    let locator = crate::core::zip64::locator::read(&mut reader).unwrap();
    assert_eq!(locator.relative_offset_eocdr, 0x30);
    assert_eq!(locator.total_disks, 1);

    let eocdr = crate::core::eocdr::read(&mut reader).unwrap();
    assert_eq!(eocdr.total_entries_in_cd, 0xFFFF);
    assert_eq!(eocdr.size_of_cd, 0xFFFFFFFF);
    assert_eq!(eocdr.offset_start_of_cd, 0xFFFFFFFF);
    assert!(reader.is_empty());
}

#[test]
fn oversized_trailer_fields_are_encoding_errors() {
    let result = record::trailer(70_000, 0, 0, false);
    assert!(matches!(result, Err(crate::error::ZipError::ValueOutOfRange { .. })));
}
