// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! ZIP64 escalation rules and record lengths, shared by the record builders, the streaming engine, and the size
//! predictor so that the three can never disagree.

use crate::core::cdr::CentralDirectoryRecord;
use crate::core::dd::RawDataDescriptor;
use crate::core::edf::RawExtensibleDataField;
use crate::core::eocdr::EndOfCentralDirectoryRecord;
use crate::core::lfh::LocalFileHeader;
use crate::core::zip64::dd::RawZip64DataDescriptor;
use crate::core::zip64::eocdr::Zip64EndOfCentralDirectoryRecord;
use crate::core::zip64::extra::Zip64ExtendedInformationExtraField;
use crate::core::zip64::locator::Zip64EndOfCentralDirectoryLocator;
use crate::core::SIGNATURE_LENGTH;
use crate::entry::ZipEntry;
use crate::spec::consts::{NON_ZIP64_MAX_NUM_FILES, NON_ZIP64_MAX_SIZE};

/// Whether a size or offset can't be stored in a 32-bit field.
pub(crate) fn exceeds_u32(value: u64) -> bool {
    value >= NON_ZIP64_MAX_SIZE
}

/// Whether an entry's local file header and data descriptor need their ZIP64 forms.
pub(crate) fn local_needs_zip64(entry: &ZipEntry) -> bool {
    exceeds_u32(entry.size)
}

/// Whether an entry's central directory record needs the ZIP64 extra field.
pub(crate) fn central_needs_zip64(entry: &ZipEntry, local_header_offset: u64) -> bool {
    exceeds_u32(entry.size) || exceeds_u32(local_header_offset)
}

/// Whether the archive trailer needs the ZIP64 end of central directory record and locator.
pub(crate) fn trailer_needs_zip64(entries: u64, cd_start: u64, cd_size: u64, any_entry_zip64: bool) -> bool {
    any_entry_zip64 || entries >= NON_ZIP64_MAX_NUM_FILES || exceeds_u32(cd_start) || exceeds_u32(cd_size)
}

pub(crate) fn local_header_len(entry: &ZipEntry) -> u64 {
    let extra = match local_needs_zip64(entry) {
        true => RawExtensibleDataField::LENGTH + Zip64ExtendedInformationExtraField::LOCAL_DATA_SIZE,
        false => 0,
    };

    (LocalFileHeader::FIXED_LENGTH + entry.filename.len() + extra) as u64
}

pub(crate) fn data_descriptor_len(entry: &ZipEntry) -> u64 {
    let raw = match (entry.streamed, local_needs_zip64(entry)) {
        (false, _) => return 0,
        (true, false) => RawDataDescriptor::LENGTH,
        (true, true) => RawZip64DataDescriptor::LENGTH,
    };

    (SIGNATURE_LENGTH + raw) as u64
}

pub(crate) fn central_header_len(entry: &ZipEntry, local_header_offset: u64) -> u64 {
    let extra = match central_needs_zip64(entry, local_header_offset) {
        true => RawExtensibleDataField::LENGTH + Zip64ExtendedInformationExtraField::CENTRAL_DATA_SIZE,
        false => 0,
    };

    (CentralDirectoryRecord::FIXED_LENGTH + entry.filename.len() + extra) as u64
}

pub(crate) fn trailer_len(zip64: bool) -> u64 {
    let zip64_records = match zip64 {
        true => Zip64EndOfCentralDirectoryRecord::LENGTH + Zip64EndOfCentralDirectoryLocator::LENGTH,
        false => 0,
    };

    (zip64_records + EndOfCentralDirectoryRecord::FIXED_LENGTH) as u64
}
