// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// The largest value a 32-bit size or offset field may hold literally; this value and above require ZIP64.
pub const NON_ZIP64_MAX_SIZE: u64 = 0xFFFFFFFF;

/// The largest entry count a 16-bit count field may hold literally; this value and above require ZIP64.
pub const NON_ZIP64_MAX_NUM_FILES: u64 = 0xFFFF;

// Sentinels written into a mirrored 32-bit or 16-bit field when its real value lives in a ZIP64 structure.
pub const ZIP64_SENTINEL_U32: u32 = 0xFFFFFFFF;
pub const ZIP64_SENTINEL_U16: u16 = 0xFFFF;

/// The compression method value of STORE, the only method this crate emits.
pub const STORE: u16 = 0;

/// The modification time used when none is provided: a zeroed DOS date and time.
pub const NO_TIMESTAMP: (u16, u16) = (0, 0);
