// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::raw;
use crate::utils::{read_u32, read_u64};

raw! {
    RawZip64DataDescriptor {
        crc_32, u32, read_u32,
        compressed_size, u64, read_u64,
        uncompressed_size, u64, read_u64
    }
}
