// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("invalid entry name {name:?}: {reason}")]
    InvalidEntryName { name: String, reason: NameViolation },
    #[error("an entry named {0:?} has already been queued")]
    DuplicateEntryName(String),
    #[error("invalid entry content: {0}")]
    InvalidEntryContent(&'static str),
    #[error("entries cannot be added once archive generation has started")]
    GenerationStarted,
    #[error("invalid date & time {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")]
    InvalidDateTime { year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32 },

    #[error("value {value} does not fit into the '{field}' field")]
    ValueOutOfRange { field: &'static str, value: u64 },
    #[error("encountered an unexpected header (actual: {0:#x}, expected: {1:#x})")]
    UnexpectedHeaderError(u32, u32),
    #[error("record ended before all of its fields could be read")]
    RecordTruncated,
    #[error("zip64 extended information field was incomplete")]
    Zip64ExtendedFieldIncomplete,

    #[error("size mismatch for entry {name:?}: declared {declared} bytes but the source produced {actual}")]
    SizeMismatch { name: String, declared: u64, actual: u64 },

    #[error("an upstream reader returned an error: {0}")]
    UpstreamReadError(#[from] std::io::Error),
    #[error("a downstream writer returned an error: {0}")]
    DownstreamWriteError(std::io::Error),
    #[error("zip generation was canceled: {0}")]
    Cancelled(String),
}

/// The path-safety rule an entry name violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameViolation {
    #[error("name is empty")]
    Empty,
    #[error("name refers to the current or parent directory")]
    DotName,
    #[error("name is an absolute path")]
    Absolute,
    #[error("name contains a control character")]
    ControlCharacter,
    #[error("name contains the reserved character '{0}'")]
    ReservedCharacter(char),
    #[error("name contains a reserved device name")]
    ReservedDeviceName,
    #[error("name traverses outside of the archive root")]
    PathTraversal,
    #[error("name exceeds 65535 bytes once encoded")]
    TooLong,
}
