// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::attribute::AttributeCompatibility;

pub const SPEC_VERSION_MADE_BY: u16 = 45;

const VERSION_DEFAULT: u16 = 10;
const VERSION_DIRECTORY: u16 = 20;
const VERSION_ZIP64: u16 = 45;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#443
pub fn as_needed_to_extract(directory: bool, zip64: bool) -> u16 {
    match (directory, zip64) {
        (_, true) => VERSION_ZIP64,
        (true, false) => VERSION_DIRECTORY,
        (false, false) => VERSION_DEFAULT,
    }
}

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#442
pub fn as_made_by() -> u16 {
    u16::from(AttributeCompatibility::Unix) << 8 | SPEC_VERSION_MADE_BY
}
