// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::{raw, raw_deref, SIGNATURE_LENGTH};
use crate::error::Result;
use crate::utils::{read_u32, read_u64};

pub const SIGNATURE: u32 = 0x07064b50;

raw! {
    RawZip64EndOfCentralDirectoryLocator {
        // number of the disk with the start of the zip64 end of central directory - 4 bytes
        disk_with_start_eocdr, u32, read_u32,
        // relative offset of the zip64 end of central directory record - 8 bytes
        relative_offset_eocdr, u64, read_u64,
        // total number of disks - 4 bytes
        total_disks, u32, read_u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zip64EndOfCentralDirectoryLocator {
    pub raw: RawZip64EndOfCentralDirectoryLocator,
}

raw_deref!(Zip64EndOfCentralDirectoryLocator, RawZip64EndOfCentralDirectoryLocator);

impl Zip64EndOfCentralDirectoryLocator {
    /// The length in bytes of this locator once written, including its signature.
    pub const LENGTH: usize = SIGNATURE_LENGTH + RawZip64EndOfCentralDirectoryLocator::LENGTH;

    pub fn as_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(Self::LENGTH);
        write(&mut buffer, self)?;
        Ok(buffer)
    }
}

/// Reads the ZIP64 end of central directory locator from the front of the given byte slice.
#[tracing::instrument(skip(reader))]
pub fn read(reader: &mut &[u8]) -> Result<Zip64EndOfCentralDirectoryLocator> {
    crate::utils::assert_signature(reader, SIGNATURE)?;
    let raw = raw_read(reader)?;
    Ok(Zip64EndOfCentralDirectoryLocator { raw })
}

/// Writes the ZIP64 end of central directory locator to the given buffer.
#[tracing::instrument(skip(buffer))]
pub fn write(buffer: &mut Vec<u8>, header: &Zip64EndOfCentralDirectoryLocator) -> Result<()> {
    buffer.extend_from_slice(&SIGNATURE.to_le_bytes());
    raw_write(buffer, &header.raw)
}
