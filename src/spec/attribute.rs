// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// An attribute host compatibility supported by this crate.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeCompatibility {
    Unix,
}

impl From<&AttributeCompatibility> for u16 {
    // Convert a supported attribute host compatibility into its relevant u16 stored with little endianness.
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4422
    fn from(compatibility: &AttributeCompatibility) -> Self {
        match compatibility {
            AttributeCompatibility::Unix => 3,
        }
    }
}

impl From<AttributeCompatibility> for u16 {
    // Convert a supported attribute host compatibility into its relevant u16 stored with little endianness.
    fn from(compatibility: AttributeCompatibility) -> Self {
        (&compatibility).into()
    }
}

pub const S_IFREG: u32 = 0o100000;
pub const S_IFDIR: u32 = 0o040000;

pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o644;
pub const DEFAULT_DIRECTORY_PERMISSIONS: u32 = 0o755;

const WRITE_PERMISSIONS: u32 = 0o222;

// MS-DOS attribute bits, stored in the low byte.
const DOS_READ_ONLY: u32 = 0x01;
const DOS_DIRECTORY: u32 = 0x10;
const DOS_ARCHIVE: u32 = 0x20;

/// Computes the external file attribute for a Unix-hosted entry.
///
/// The upper 16 bits hold the POSIX file type and permission bits, the lower 16 bits the MS-DOS
/// attributes. A read-only entry loses its write permissions and gains the DOS read-only bit.
pub fn external_file_attribute(directory: bool, permissions: Option<u32>, readonly: bool) -> u32 {
    let (file_type, default_permissions, mut dos) = match directory {
        true => (S_IFDIR, DEFAULT_DIRECTORY_PERMISSIONS, DOS_DIRECTORY),
        false => (S_IFREG, DEFAULT_FILE_PERMISSIONS, DOS_ARCHIVE),
    };

    let mut permissions = permissions.unwrap_or(default_permissions) & 0o777;

    if readonly {
        permissions &= !WRITE_PERMISSIONS;
        dos |= DOS_READ_ONLY;
    }

    (file_type | permissions) << 16 | dos
}
