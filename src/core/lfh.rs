// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::{raw, raw_deref, SIGNATURE_LENGTH};
use crate::error::Result;
use crate::utils::{read_u16, read_u32};

pub const SIGNATURE: u32 = 0x4034b50;

raw! {
    RawLocalFileHeader {
        version_needed_to_extract, u16, read_u16,
        general_purpose_flag, u16, read_u16,
        compression_method, u16, read_u16,
        last_mod_file_time, u16, read_u16,
        last_mod_file_date, u16, read_u16,
        crc_32, u32, read_u32,
        compressed_size, u32, read_u32,
        uncompressed_size, u32, read_u32,
        file_name_length, u16, read_u16,
        extra_field_length, u16, read_u16
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalFileHeader {
    pub raw: RawLocalFileHeader,
    pub file_name: Vec<u8>,
    pub extra_field: Vec<u8>,
}

raw_deref!(LocalFileHeader, RawLocalFileHeader);

impl LocalFileHeader {
    /// The length in bytes of the header's fixed-size portion, including its signature.
    pub const FIXED_LENGTH: usize = SIGNATURE_LENGTH + RawLocalFileHeader::LENGTH;

    /// Returns the total length in bytes of this header once written.
    pub fn byte_len(&self) -> usize {
        Self::FIXED_LENGTH + self.file_name.len() + self.extra_field.len()
    }

    /// Returns the exact bytes of this header.
    pub fn as_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.byte_len());
        write(&mut buffer, self)?;
        Ok(buffer)
    }
}

/// Reads a local file header from the front of the given byte slice.
///
/// This function does so by:
/// - asserting the signature of the local file header
/// - reading the raw local file header
/// - reading the file name
/// - reading the extra field
#[tracing::instrument(skip(reader))]
pub fn read(reader: &mut &[u8]) -> Result<LocalFileHeader> {
    crate::utils::assert_signature(reader, SIGNATURE)?;

    let raw = raw_read(reader)?;
    let file_name = crate::utils::read_bytes(reader, raw.file_name_length as usize)?;
    let extra_field = crate::utils::read_bytes(reader, raw.extra_field_length as usize)?;

    Ok(LocalFileHeader { raw, file_name, extra_field })
}

/// Writes a local file header to the given buffer.
///
/// This function does so by:
/// - writing the signature of the local file header
/// - writing the raw local file header
/// - writing the file name
/// - writing the extra field
#[tracing::instrument(skip(buffer))]
pub fn write(buffer: &mut Vec<u8>, header: &LocalFileHeader) -> Result<()> {
    buffer.extend_from_slice(&SIGNATURE.to_le_bytes());

    raw_write(buffer, &header.raw)?;
    buffer.extend_from_slice(&header.file_name);
    buffer.extend_from_slice(&header.extra_field);

    Ok(())
}
