// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

/// Splits `N` bytes off the front of a byte slice, advancing it.
fn read_array<const N: usize>(reader: &mut &[u8]) -> Result<[u8; N]> {
    if reader.len() < N {
        return Err(ZipError::RecordTruncated);
    }

    let (head, tail) = reader.split_at(N);
    *reader = tail;

    let mut array = [0; N];
    array.copy_from_slice(head);
    Ok(array)
}

pub(crate) fn read_u16(reader: &mut &[u8]) -> Result<u16> {
    Ok(u16::from_le_bytes(read_array(reader)?))
}

pub(crate) fn read_u32(reader: &mut &[u8]) -> Result<u32> {
    Ok(u32::from_le_bytes(read_array(reader)?))
}

pub(crate) fn read_u64(reader: &mut &[u8]) -> Result<u64> {
    Ok(u64::from_le_bytes(read_array(reader)?))
}

/// Read and return a dynamic length vector of bytes from the front of a byte slice.
pub(crate) fn read_bytes(reader: &mut &[u8], length: usize) -> Result<Vec<u8>> {
    if reader.len() < length {
        return Err(ZipError::RecordTruncated);
    }

    let (head, tail) = reader.split_at(length);
    *reader = tail;
    Ok(head.to_vec())
}

/// Assert that the next four-byte signature matches the expected signature.
pub(crate) fn assert_signature(reader: &mut &[u8], expected: u32) -> Result<()> {
    match read_u32(reader)? {
        actual if actual == expected => Ok(()),
        actual => Err(ZipError::UnexpectedHeaderError(actual, expected)),
    }
}

/// Encodes a non-negative integer into `width` little-endian bytes.
///
/// Fails if the value cannot be represented within the requested width.
pub fn encode_number(value: u64, width: usize) -> Result<Vec<u8>> {
    let bytes = value.to_le_bytes();

    if width > bytes.len() || bytes[width..].iter().any(|byte| *byte != 0) {
        return Err(ZipError::ValueOutOfRange { field: "encoded number", value });
    }

    Ok(bytes[..width].to_vec())
}

/// Narrows a 64-bit value into a smaller header field, failing if it does not fit.
pub(crate) fn narrow<T: TryFrom<u64>>(field: &'static str, value: u64) -> Result<T> {
    T::try_from(value).map_err(|_| ZipError::ValueOutOfRange { field, value })
}
