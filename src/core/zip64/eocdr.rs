// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::{raw, raw_deref, SIGNATURE_LENGTH};
use crate::error::Result;
use crate::utils::{read_u16, read_u32, read_u64};

pub const SIGNATURE: u32 = 0x06064b50;

raw! {
    RawZip64EndOfCentralDirectoryRecord {
        // size of zip64 end of central directory record - 8 bytes
        size_of_record, u64, read_u64,
        // version made by - 2 bytes
        version_made_by, u16, read_u16,
        // version needed to extract - 2 bytes
        version_needed, u16, read_u16,
        // number of this disk - 4 bytes
        number_of_this_disk, u32, read_u32,
        // number of the disk with the start of the central directory - 4 bytes
        disk_with_start_of_cd, u32, read_u32,
        // total number of entries in the central directory on this disk - 8 bytes
        total_entries_in_cd_on_this_disk, u64, read_u64,
        // total number of entries in the central directory - 8 bytes
        total_entries_in_cd, u64, read_u64,
        // size of the central directory - 8 bytes
        size_of_cd, u64, read_u64,
        // offset of start of central directory with respect to the starting disk number - 8 bytes
        offset_start_of_cd, u64, read_u64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zip64EndOfCentralDirectoryRecord {
    pub raw: RawZip64EndOfCentralDirectoryRecord,
}

raw_deref!(Zip64EndOfCentralDirectoryRecord, RawZip64EndOfCentralDirectoryRecord);

impl Zip64EndOfCentralDirectoryRecord {
    /// The length in bytes of this record once written, including its signature.
    pub const LENGTH: usize = SIGNATURE_LENGTH + RawZip64EndOfCentralDirectoryRecord::LENGTH;

    /// The value of `size_of_record`: the record's length minus its signature and this field itself.
    pub const SIZE_OF_RECORD: u64 = (RawZip64EndOfCentralDirectoryRecord::LENGTH - 8) as u64;

    pub fn as_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(Self::LENGTH);
        write(&mut buffer, self)?;
        Ok(buffer)
    }
}

/// Reads the ZIP64 end of central directory record from the front of the given byte slice.
///
/// This function does so by:
/// - asserting the signature of the ZIP64 end of central directory record
/// - reading the raw ZIP64 end of central directory record
#[tracing::instrument(skip(reader))]
pub fn read(reader: &mut &[u8]) -> Result<Zip64EndOfCentralDirectoryRecord> {
    crate::utils::assert_signature(reader, SIGNATURE)?;
    let raw = raw_read(reader)?;
    Ok(Zip64EndOfCentralDirectoryRecord { raw })
}

/// Writes the ZIP64 end of central directory record to the given buffer.
///
/// This function does so by:
/// - writing the signature of the ZIP64 end of central directory record
/// - writing the raw ZIP64 end of central directory record
#[tracing::instrument(skip(buffer))]
pub fn write(buffer: &mut Vec<u8>, header: &Zip64EndOfCentralDirectoryRecord) -> Result<()> {
    buffer.extend_from_slice(&SIGNATURE.to_le_bytes());
    raw_write(buffer, &header.raw)
}
