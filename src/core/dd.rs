// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::zip64::dd::{self as zip64_dd, RawZip64DataDescriptor};
use crate::core::{raw, SIGNATURE_LENGTH};
use crate::error::Result;
use crate::utils::read_u32;

pub const SIGNATURE: u32 = 0x8074b50;

raw! {
    RawDataDescriptor {
        crc_32, u32, read_u32,
        compressed_size, u32, read_u32,
        uncompressed_size, u32, read_u32
    }
}

/// A data descriptor trailing a streamed entry's data.
///
/// The ZIP64 form widens both size fields to eight bytes and is used whenever the entry's size requires ZIP64.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataDescriptor {
    Standard(RawDataDescriptor),
    Zip64(RawZip64DataDescriptor),
}

impl DataDescriptor {
    pub fn crc_32(&self) -> u32 {
        match self {
            DataDescriptor::Standard(raw) => raw.crc_32,
            DataDescriptor::Zip64(raw) => raw.crc_32,
        }
    }

    pub fn compressed_size(&self) -> u64 {
        match self {
            DataDescriptor::Standard(raw) => raw.compressed_size.into(),
            DataDescriptor::Zip64(raw) => raw.compressed_size,
        }
    }

    pub fn uncompressed_size(&self) -> u64 {
        match self {
            DataDescriptor::Standard(raw) => raw.uncompressed_size.into(),
            DataDescriptor::Zip64(raw) => raw.uncompressed_size,
        }
    }

    /// Returns the length in bytes of this descriptor once written, including its signature.
    pub fn byte_len(&self) -> usize {
        SIGNATURE_LENGTH
            + match self {
                DataDescriptor::Standard(_) => RawDataDescriptor::LENGTH,
                DataDescriptor::Zip64(_) => RawZip64DataDescriptor::LENGTH,
            }
    }

    /// Returns the exact bytes of this descriptor.
    pub fn as_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.byte_len());
        write(&mut buffer, self)?;
        Ok(buffer)
    }
}

/// Reads a data descriptor from the front of the given byte slice.
///
/// Whether the descriptor is in its ZIP64 form can't be told from the bytes alone, so the caller must
/// state which to expect.
#[tracing::instrument(skip(reader))]
pub fn read(reader: &mut &[u8], zip64: bool) -> Result<DataDescriptor> {
    crate::utils::assert_signature(reader, SIGNATURE)?;

    match zip64 {
        true => Ok(DataDescriptor::Zip64(zip64_dd::raw_read(reader)?)),
        false => Ok(DataDescriptor::Standard(raw_read(reader)?)),
    }
}

/// Writes a data descriptor to the given buffer.
///
/// This function does so by:
/// - writing the signature of the data descriptor
/// - writing the raw data descriptor in its standard or ZIP64 form
#[tracing::instrument(skip(buffer))]
pub fn write(buffer: &mut Vec<u8>, descriptor: &DataDescriptor) -> Result<()> {
    buffer.extend_from_slice(&SIGNATURE.to_le_bytes());

    match descriptor {
        DataDescriptor::Standard(raw) => raw_write(buffer, raw),
        DataDescriptor::Zip64(raw) => zip64_dd::raw_write(buffer, raw),
    }
}
