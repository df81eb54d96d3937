// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::{raw, raw_deref, SIGNATURE_LENGTH};
use crate::error::Result;
use crate::utils::{read_u16, read_u32};

pub const SIGNATURE: u32 = 0x06054b50;

raw! {
    RawEndOfCentralDirectoryRecord {
        number_of_this_disk, u16, read_u16,
        disk_with_start_of_cd, u16, read_u16,
        total_entries_in_cd_on_this_disk, u16, read_u16,
        total_entries_in_cd, u16, read_u16,
        size_of_cd, u32, read_u32,
        offset_start_of_cd, u32, read_u32,
        zip_file_comment_length, u16, read_u16
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndOfCentralDirectoryRecord {
    pub raw: RawEndOfCentralDirectoryRecord,
    pub zip_file_comment: Vec<u8>,
}

raw_deref!(EndOfCentralDirectoryRecord, RawEndOfCentralDirectoryRecord);

impl EndOfCentralDirectoryRecord {
    /// The length in bytes of the record's fixed-size portion, including its signature.
    pub const FIXED_LENGTH: usize = SIGNATURE_LENGTH + RawEndOfCentralDirectoryRecord::LENGTH;

    pub fn byte_len(&self) -> usize {
        Self::FIXED_LENGTH + self.zip_file_comment.len()
    }

    pub fn as_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.byte_len());
        write(&mut buffer, self)?;
        Ok(buffer)
    }
}

/// Reads the end of central directory record from the front of the given byte slice.
///
/// This function does so by:
/// - asserting the signature of the end of central directory record
/// - reading the raw end of central directory record
/// - reading the zip file comment
#[tracing::instrument(skip(reader))]
pub fn read(reader: &mut &[u8]) -> Result<EndOfCentralDirectoryRecord> {
    crate::utils::assert_signature(reader, SIGNATURE)?;

    let raw = raw_read(reader)?;
    let zip_file_comment = crate::utils::read_bytes(reader, raw.zip_file_comment_length as usize)?;

    Ok(EndOfCentralDirectoryRecord { raw, zip_file_comment })
}

/// Writes the end of central directory record to the given buffer.
///
/// This function does so by:
/// - writing the signature of the end of central directory record
/// - writing the raw end of central directory record
/// - writing the zip file comment
#[tracing::instrument(skip(buffer))]
pub fn write(buffer: &mut Vec<u8>, header: &EndOfCentralDirectoryRecord) -> Result<()> {
    buffer.extend_from_slice(&SIGNATURE.to_le_bytes());

    raw_write(buffer, &header.raw)?;
    buffer.extend_from_slice(&header.zip_file_comment);

    Ok(())
}
