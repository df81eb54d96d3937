// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::fmt::{Debug, Formatter};
use std::pin::Pin;

use futures_lite::io::AsyncRead;

/// A boxed source of an entry's bytes.
pub type EntryReader = Pin<Box<dyn AsyncRead + Send>>;

/// The data backing a queued entry.
pub(crate) enum EntryContent {
    /// A directory, or a file with no data.
    Empty,
    /// Data held in memory; its CRC and size are known before the local file header is written.
    Owned(Vec<u8>),
    /// Data pulled from a reader of a declared length; its CRC follows the data in a data descriptor.
    Reader(EntryReader),
}

impl Debug for EntryContent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryContent::Empty => f.write_str("Empty"),
            EntryContent::Owned(data) => f.debug_tuple("Owned").field(&data.len()).finish(),
            EntryContent::Reader(_) => f.write_str("Reader"),
        }
    }
}
