// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{NameViolation, Result, ZipError};

const RESERVED_CHARACTERS: &[char] = &[':', '*', '?', '<', '>', '|'];

const RESERVED_DEVICE_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8", "COM9", "LPT1",
    "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// The longest name, in bytes, that fits a header's 16-bit name length field.
pub const MAX_NAME_LENGTH: usize = u16::MAX as usize;

/// Checks an archive-relative entry name against the path-safety rules.
///
/// Device names are matched against every `/`-separated segment, ignoring case and anything from the
/// segment's first `.` onwards.
pub fn validate(name: &str) -> Result<()> {
    check(name).map_err(|reason| ZipError::InvalidEntryName { name: name.to_owned(), reason })
}

fn check(name: &str) -> std::result::Result<(), NameViolation> {
    if name.is_empty() {
        return Err(NameViolation::Empty);
    }
    if name == "." || name == ".." {
        return Err(NameViolation::DotName);
    }
    if name.starts_with('/') || name.starts_with('\\') {
        return Err(NameViolation::Absolute);
    }
    if name.bytes().any(|byte| byte < 0x20) {
        return Err(NameViolation::ControlCharacter);
    }
    if let Some(character) = name.chars().find(|character| RESERVED_CHARACTERS.contains(character)) {
        return Err(NameViolation::ReservedCharacter(character));
    }
    if name.split('/').any(|segment| segment == "..") {
        return Err(NameViolation::PathTraversal);
    }
    if name.split('/').any(is_reserved_device_name) {
        return Err(NameViolation::ReservedDeviceName);
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(NameViolation::TooLong);
    }

    Ok(())
}

fn is_reserved_device_name(segment: &str) -> bool {
    let stem = segment.split('.').next().unwrap_or_default();
    RESERVED_DEVICE_NAMES.iter().any(|reserved| reserved.eq_ignore_ascii_case(stem))
}
