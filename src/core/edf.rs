// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::{raw, raw_deref};
use crate::error::Result;
use crate::utils::read_u16;

/// The header ID of the ZIP64 extended information extra field.
pub const ZIP64_HEADER_ID: u16 = 0x0001;

raw! {
    RawExtensibleDataField {
        // Head ID - 2 bytes
        header_id, u16, read_u16,
        // Data Size - 2 bytes
        data_size, u16, read_u16
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensibleDataField {
    pub raw: RawExtensibleDataField,
    pub data: Vec<u8>,
}

raw_deref!(ExtensibleDataField, RawExtensibleDataField);

impl ExtensibleDataField {
    /// Constructs a field from its header ID and data, failing if the data is too long to be described.
    pub fn new(header_id: u16, data: Vec<u8>) -> Result<Self> {
        let data_size = crate::utils::narrow("extra field data size", data.len() as u64)?;
        Ok(ExtensibleDataField { raw: RawExtensibleDataField { header_id, data_size }, data })
    }

    pub fn byte_len(&self) -> usize {
        RawExtensibleDataField::LENGTH + self.data.len()
    }
}

/// Reads an extensible data field from the front of the given byte slice.
///
/// This function does so by:
/// - reading the raw extensible data field
/// - reading the data of the extensible data field
#[tracing::instrument(skip(reader))]
pub fn read(reader: &mut &[u8]) -> Result<ExtensibleDataField> {
    let raw = raw_read(reader)?;
    let data = crate::utils::read_bytes(reader, raw.data_size as usize)?;

    Ok(ExtensibleDataField { raw, data })
}

/// Reads every extensible data field packed into a header's extra field.
pub fn read_all(mut extra_field: &[u8]) -> Result<Vec<ExtensibleDataField>> {
    let mut fields = Vec::new();

    while !extra_field.is_empty() {
        fields.push(read(&mut extra_field)?);
    }

    Ok(fields)
}

/// Writes an extensible data field to the given buffer.
///
/// This function does so by:
/// - writing the raw extensible data field
/// - writing the data of the extensible data field
#[tracing::instrument(skip(buffer))]
pub fn write(buffer: &mut Vec<u8>, field: &ExtensibleDataField) -> Result<()> {
    raw_write(buffer, &field.raw)?;
    buffer.extend_from_slice(&field.data);
    Ok(())
}
