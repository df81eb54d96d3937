// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::edf::{ExtensibleDataField, ZIP64_HEADER_ID};
use crate::error::{Result, ZipError};
use crate::utils::{read_u32, read_u64};

/// The ZIP64 extended information extra field.
///
/// Local file headers carry only the two sizes. Central directory records additionally carry the
/// local header offset and the disk start number, so that every mirrored field of the record can hold
/// its sentinel value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Zip64ExtendedInformationExtraField {
    pub uncompressed_size: u64,
    pub compressed_size: u64,
    pub relative_header_offset: Option<u64>,
    pub disk_start_number: Option<u32>,
}

impl Zip64ExtendedInformationExtraField {
    /// The data size of the field as carried by a local file header.
    pub const LOCAL_DATA_SIZE: usize = 16;
    /// The data size of the field as carried by a central directory record.
    pub const CENTRAL_DATA_SIZE: usize = 28;

    /// Returns the length of this field's data, excluding its four-byte header.
    pub fn data_size(&self) -> usize {
        16 + self.relative_header_offset.map(|_| 8).unwrap_or_default()
            + self.disk_start_number.map(|_| 4).unwrap_or_default()
    }

    /// Packs this field into a generic extensible data field.
    pub fn to_field(&self) -> Result<ExtensibleDataField> {
        let mut data = Vec::with_capacity(self.data_size());

        data.extend_from_slice(&self.uncompressed_size.to_le_bytes());
        data.extend_from_slice(&self.compressed_size.to_le_bytes());
        if let Some(offset) = self.relative_header_offset {
            data.extend_from_slice(&offset.to_le_bytes());
        }
        if let Some(disk) = self.disk_start_number {
            data.extend_from_slice(&disk.to_le_bytes());
        }

        ExtensibleDataField::new(ZIP64_HEADER_ID, data)
    }

    /// Decodes a ZIP64 field from a generic extensible data field.
    ///
    /// Both sizes must be present; the offset and disk start number are read when the data is long
    /// enough to hold them.
    pub fn from_field(field: &ExtensibleDataField) -> Result<Self> {
        if field.header_id != ZIP64_HEADER_ID {
            return Err(ZipError::UnexpectedHeaderError(field.header_id.into(), ZIP64_HEADER_ID.into()));
        }

        let mut data = field.data.as_slice();
        if data.len() < 16 {
            return Err(ZipError::Zip64ExtendedFieldIncomplete);
        }

        let uncompressed_size = read_u64(&mut data)?;
        let compressed_size = read_u64(&mut data)?;
        let relative_header_offset = if data.len() >= 8 { Some(read_u64(&mut data)?) } else { None };
        let disk_start_number = if data.len() >= 4 { Some(read_u32(&mut data)?) } else { None };

        Ok(Self { uncompressed_size, compressed_size, relative_header_offset, disk_start_number })
    }

    /// Finds and decodes the ZIP64 field within a header's packed extra field, if one is present.
    pub fn find(extra_field: &[u8]) -> Result<Option<Self>> {
        crate::core::edf::read_all(extra_field)?
            .iter()
            .find(|field| field.header_id == ZIP64_HEADER_ID)
            .map(Self::from_field)
            .transpose()
    }
}
