// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::{raw, raw_deref, SIGNATURE_LENGTH};
use crate::error::Result;
use crate::utils::{read_u16, read_u32};

pub const SIGNATURE: u32 = 0x2014b50;

raw! {
    RawCentralDirectoryRecord {
        version_made_by, u16, read_u16,
        version_needed_to_extract, u16, read_u16,
        general_purpose_flag, u16, read_u16,
        compression_method, u16, read_u16,
        last_mod_file_time, u16, read_u16,
        last_mod_file_date, u16, read_u16,
        crc_32, u32, read_u32,
        compressed_size, u32, read_u32,
        uncompressed_size, u32, read_u32,
        file_name_length, u16, read_u16,
        extra_field_length, u16, read_u16,
        file_comment_length, u16, read_u16,
        disk_number_start, u16, read_u16,
        internal_file_attributes, u16, read_u16,
        external_file_attributes, u32, read_u32,
        relative_offset_of_local_header, u32, read_u32
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CentralDirectoryRecord {
    pub raw: RawCentralDirectoryRecord,
    pub file_name: Vec<u8>,
    pub extra_field: Vec<u8>,
    pub file_comment: Vec<u8>,
}

raw_deref!(CentralDirectoryRecord, RawCentralDirectoryRecord);

impl CentralDirectoryRecord {
    /// The length in bytes of the record's fixed-size portion, including its signature.
    pub const FIXED_LENGTH: usize = SIGNATURE_LENGTH + RawCentralDirectoryRecord::LENGTH;

    /// Returns the total length in bytes of this record once written.
    pub fn byte_len(&self) -> usize {
        Self::FIXED_LENGTH + self.file_name.len() + self.extra_field.len() + self.file_comment.len()
    }

    /// Returns the exact bytes of this record.
    pub fn as_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.byte_len());
        write(&mut buffer, self)?;
        Ok(buffer)
    }
}

/// Reads a central directory record from the front of the given byte slice.
///
/// This function does so by:
/// - asserting the signature of the central directory record
/// - reading the raw central directory record
/// - reading the file name
/// - reading the extra field
/// - reading the file comment
#[tracing::instrument(skip(reader))]
pub fn read(reader: &mut &[u8]) -> Result<CentralDirectoryRecord> {
    crate::utils::assert_signature(reader, SIGNATURE)?;

    let raw = raw_read(reader)?;
    let file_name = crate::utils::read_bytes(reader, raw.file_name_length as usize)?;
    let extra_field = crate::utils::read_bytes(reader, raw.extra_field_length as usize)?;
    let file_comment = crate::utils::read_bytes(reader, raw.file_comment_length as usize)?;

    Ok(CentralDirectoryRecord { raw, file_name, extra_field, file_comment })
}

/// Writes a central directory record to the given buffer.
///
/// This function does so by:
/// - writing the signature of the central directory record
/// - writing the raw central directory record
/// - writing the file name
/// - writing the extra field
/// - writing the file comment
#[tracing::instrument(skip(buffer))]
pub fn write(buffer: &mut Vec<u8>, header: &CentralDirectoryRecord) -> Result<()> {
    buffer.extend_from_slice(&SIGNATURE.to_le_bytes());

    raw_write(buffer, &header.raw)?;
    buffer.extend_from_slice(&header.file_name);
    buffer.extend_from_slice(&header.extra_field);
    buffer.extend_from_slice(&header.file_comment);

    Ok(())
}
