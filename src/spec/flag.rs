// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// The general purpose bit flags this crate emits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeneralPurposeFlag {
    /// Bit 3: CRC and sizes follow the entry's data in a data descriptor.
    pub data_descriptor: bool,
    /// Bit 11: the file name is UTF-8 encoded.
    pub filename_unicode: bool,
}

impl From<GeneralPurposeFlag> for u16 {
    fn from(flags: GeneralPurposeFlag) -> u16 {
        let data_descriptor: u16 = match flags.data_descriptor {
            false => 0x0,
            true => 0x8,
        };
        let filename_unicode: u16 = match flags.filename_unicode {
            false => 0x0,
            true => 0x800,
        };

        data_descriptor | filename_unicode
    }
}

impl From<u16> for GeneralPurposeFlag {
    fn from(value: u16) -> GeneralPurposeFlag {
        let data_descriptor = (value & 0x8) != 0;
        let filename_unicode = (value & 0x800) != 0;

        GeneralPurposeFlag { data_descriptor, filename_unicode }
    }
}
