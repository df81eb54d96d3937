// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::cdr::{CentralDirectoryRecord, RawCentralDirectoryRecord};
use crate::core::dd::{DataDescriptor, RawDataDescriptor};
use crate::core::eocdr::{EndOfCentralDirectoryRecord, RawEndOfCentralDirectoryRecord};
use crate::core::lfh::{LocalFileHeader, RawLocalFileHeader};
use crate::core::zip64::dd::RawZip64DataDescriptor;
use crate::core::zip64::eocdr::{RawZip64EndOfCentralDirectoryRecord, Zip64EndOfCentralDirectoryRecord};
use crate::core::zip64::extra::Zip64ExtendedInformationExtraField;
use crate::core::zip64::locator::{RawZip64EndOfCentralDirectoryLocator, Zip64EndOfCentralDirectoryLocator};
use crate::entry::ZipEntry;
use crate::error::Result;
use crate::spec::consts::{NO_TIMESTAMP, STORE, ZIP64_SENTINEL_U16, ZIP64_SENTINEL_U32};
use crate::spec::version::{as_made_by, as_needed_to_extract};
use crate::utils::narrow;
use crate::write::layout;

fn date_and_time(entry: &ZipEntry) -> (u16, u16) {
    entry.last_modification_date.map(|date| (date.date, date.time)).unwrap_or(NO_TIMESTAMP)
}

fn extra_field_bytes(field: Zip64ExtendedInformationExtraField) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    crate::core::edf::write(&mut buffer, &field.to_field()?)?;
    Ok(buffer)
}

/// Builds an entry's local file header.
///
/// Streamed entries get a zeroed CRC and sizes (or sentinels plus a zeroed ZIP64 field) as their real values
/// follow the data in a descriptor.
pub(crate) fn local_file_header(entry: &ZipEntry, crc: u32) -> Result<LocalFileHeader> {
    let zip64 = layout::local_needs_zip64(entry);
    let (date, time) = date_and_time(entry);

    let known_size = match entry.streamed {
        true => 0,
        false => entry.size,
    };
    let (crc_32, size) = match (entry.streamed, zip64) {
        (true, false) => (0, 0),
        (true, true) => (0, ZIP64_SENTINEL_U32),
        (false, false) => (crc, narrow("uncompressed size", entry.size)?),
        (false, true) => (crc, ZIP64_SENTINEL_U32),
    };

    let extra_field = match zip64 {
        true => extra_field_bytes(Zip64ExtendedInformationExtraField {
            uncompressed_size: known_size,
            compressed_size: known_size,
            ..Default::default()
        })?,
        false => Vec::new(),
    };

    let file_name = entry.filename.as_bytes().to_vec();
    let raw = RawLocalFileHeader {
        version_needed_to_extract: as_needed_to_extract(entry.dir, zip64),
        general_purpose_flag: entry.general_purpose_flag().into(),
        compression_method: STORE,
        last_mod_file_time: time,
        last_mod_file_date: date,
        crc_32,
        compressed_size: size,
        uncompressed_size: size,
        file_name_length: narrow("file name length", file_name.len() as u64)?,
        extra_field_length: narrow("extra field length", extra_field.len() as u64)?,
    };

    Ok(LocalFileHeader { raw, file_name, extra_field })
}

/// Builds the data descriptor trailing a streamed entry.
pub(crate) fn data_descriptor(entry: &ZipEntry, crc: u32) -> Result<DataDescriptor> {
    match layout::local_needs_zip64(entry) {
        true => Ok(DataDescriptor::Zip64(RawZip64DataDescriptor {
            crc_32: crc,
            compressed_size: entry.size,
            uncompressed_size: entry.size,
        })),
        false => {
            let size = narrow("uncompressed size", entry.size)?;
            Ok(DataDescriptor::Standard(RawDataDescriptor { crc_32: crc, compressed_size: size, uncompressed_size: size }))
        }
    }
}

/// Builds an entry's central directory record.
///
/// When either the entry's size or its local header offset needs ZIP64, every mirrored field holds its sentinel
/// and the real values move into the ZIP64 extra field.
pub(crate) fn central_directory_record(
    entry: &ZipEntry,
    crc: u32,
    local_header_offset: u64,
) -> Result<CentralDirectoryRecord> {
    let zip64 = layout::central_needs_zip64(entry, local_header_offset);
    let (date, time) = date_and_time(entry);

    let (size, offset, disk_number_start, extra_field) = match zip64 {
        true => {
            let field = Zip64ExtendedInformationExtraField {
                uncompressed_size: entry.size,
                compressed_size: entry.size,
                relative_header_offset: Some(local_header_offset),
                disk_start_number: Some(0),
            };
            (ZIP64_SENTINEL_U32, ZIP64_SENTINEL_U32, ZIP64_SENTINEL_U16, extra_field_bytes(field)?)
        }
        false => (
            narrow("uncompressed size", entry.size)?,
            narrow("local header offset", local_header_offset)?,
            0,
            Vec::new(),
        ),
    };

    let file_name = entry.filename.as_bytes().to_vec();
    let raw = RawCentralDirectoryRecord {
        version_made_by: as_made_by(),
        version_needed_to_extract: as_needed_to_extract(entry.dir, zip64),
        general_purpose_flag: entry.general_purpose_flag().into(),
        compression_method: STORE,
        last_mod_file_time: time,
        last_mod_file_date: date,
        crc_32: crc,
        compressed_size: size,
        uncompressed_size: size,
        file_name_length: narrow("file name length", file_name.len() as u64)?,
        extra_field_length: narrow("extra field length", extra_field.len() as u64)?,
        file_comment_length: 0,
        disk_number_start,
        internal_file_attributes: 0,
        external_file_attributes: entry.external_file_attribute,
        relative_offset_of_local_header: offset,
    };

    Ok(CentralDirectoryRecord { raw, file_name, extra_field, file_comment: Vec::new() })
}

/// Builds the archive trailer: the ZIP64 end of central directory record and locator when needed, followed by
/// the end of central directory record.
pub(crate) fn trailer(entries: u64, cd_start: u64, cd_size: u64, zip64: bool) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(layout::trailer_len(zip64) as usize);

    let eocdr = match zip64 {
        true => {
            let zip64_eocdr = Zip64EndOfCentralDirectoryRecord {
                raw: RawZip64EndOfCentralDirectoryRecord {
                    size_of_record: Zip64EndOfCentralDirectoryRecord::SIZE_OF_RECORD,
                    version_made_by: as_made_by(),
                    version_needed: as_needed_to_extract(false, true),
                    number_of_this_disk: 0,
                    disk_with_start_of_cd: 0,
                    total_entries_in_cd_on_this_disk: entries,
                    total_entries_in_cd: entries,
                    size_of_cd: cd_size,
                    offset_start_of_cd: cd_start,
                },
            };
            crate::core::zip64::eocdr::write(&mut buffer, &zip64_eocdr)?;

            let locator = Zip64EndOfCentralDirectoryLocator {
                raw: RawZip64EndOfCentralDirectoryLocator {
                    disk_with_start_eocdr: 0,
                    relative_offset_eocdr: cd_start + cd_size,
                    total_disks: 1,
                },
            };
            crate::core::zip64::locator::write(&mut buffer, &locator)?;

            RawEndOfCentralDirectoryRecord {
                number_of_this_disk: 0,
                disk_with_start_of_cd: 0,
                total_entries_in_cd_on_this_disk: ZIP64_SENTINEL_U16,
                total_entries_in_cd: ZIP64_SENTINEL_U16,
                size_of_cd: ZIP64_SENTINEL_U32,
                offset_start_of_cd: ZIP64_SENTINEL_U32,
                zip_file_comment_length: 0,
            }
        }
        false => {
            let entries = narrow("total entries", entries)?;
            RawEndOfCentralDirectoryRecord {
                number_of_this_disk: 0,
                disk_with_start_of_cd: 0,
                total_entries_in_cd_on_this_disk: entries,
                total_entries_in_cd: entries,
                size_of_cd: narrow("central directory size", cd_size)?,
                offset_start_of_cd: narrow("central directory offset", cd_start)?,
                zip_file_comment_length: 0,
            }
        }
    };

    let eocdr = EndOfCentralDirectoryRecord { raw: eocdr, zip_file_comment: Vec::new() };
    crate::core::eocdr::write(&mut buffer, &eocdr)?;

    Ok(buffer)
}
