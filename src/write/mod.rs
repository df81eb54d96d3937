// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports streaming ZIP archives.
//!
//! # Example
//! ```no_run
//! # use async_zipper::{ZipEntryBuilder, Zipper};
//! # use async_zipper::error::ZipError;
//! # use futures_lite::io::Cursor;
//! #
//! # async fn run() -> Result<(), ZipError> {
//! let mut zipper = Zipper::new();
//!
//! zipper
//!     .add(ZipEntryBuilder::new("docs/"))?
//!     .add(ZipEntryBuilder::new("docs/readme.txt").data(b"This is an example file.".to_vec()))?
//!     .add(ZipEntryBuilder::new("docs/streamed.bin").reader(Cursor::new(vec![0; 512])).size(512))?;
//!
//! let predicted = zipper.predict_size();
//!
//! let mut archive = Vec::new();
//! let written = zipper.stream()?.write_to(&mut archive).await?;
//!
//! assert_eq!(predicted, written);
//! #   Ok(())
//! # }
//! ```

pub(crate) mod layout;
pub(crate) mod predict;
pub(crate) mod reader;
pub(crate) mod record;
pub(crate) mod stream;

pub use reader::ZipReader;
pub use stream::ZipStream;

use std::collections::HashSet;

use tokio_util::sync::CancellationToken;

use crate::entry::builder::ZipEntryBuilder;
use crate::entry::content::EntryContent;
use crate::entry::ZipEntry;
use crate::error::{Result, ZipError};

/// A queue of entries which streams out as a store-only ZIP archive.
///
/// Entries are validated as they're added and may only be added until generation starts. The queue's order fixes
/// the order of entries within the archive.
#[derive(Debug, Default)]
pub struct Zipper {
    entries: Vec<ZipEntry>,
    contents: Vec<EntryContent>,
    names: HashSet<String>,
    started: bool,
}

impl Zipper {
    /// Constructs a new, empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and queues an entry, returning the queue for chaining.
    ///
    /// Fails without queueing anything if the entry's name or content is invalid, if an entry with the same name is
    /// already queued, or if generation has already started.
    pub fn add(&mut self, builder: ZipEntryBuilder) -> Result<&mut Self> {
        if self.started {
            return Err(ZipError::GenerationStarted);
        }

        let (entry, content) = builder.build()?;

        if self.names.contains(&entry.filename) {
            return Err(ZipError::DuplicateEntryName(entry.filename));
        }

        tracing::debug!(name = %entry.filename, size = entry.size, streamed = entry.streamed, "queued entry");

        self.names.insert(entry.filename.clone());
        self.entries.push(entry);
        self.contents.push(content);

        Ok(self)
    }

    /// Returns the queued entries, in archive order.
    pub fn entries(&self) -> &[ZipEntry] {
        &self.entries
    }

    /// Returns whether generation has started, after which no entries may be added.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Returns the exact length in bytes of the archive [`Zipper::stream()`] will produce.
    pub fn predict_size(&self) -> u64 {
        predict::predict_size(&self.entries)
    }

    /// Starts generation, locking the queue.
    ///
    /// Each queue can be streamed once; later calls fail with [`ZipError::GenerationStarted`].
    pub fn stream(&mut self) -> Result<ZipStream> {
        self.start(None)
    }

    /// Starts generation as with [`Zipper::stream()`], cancelling it once the given token is triggered.
    pub fn stream_with_cancellation(&mut self, token: CancellationToken) -> Result<ZipStream> {
        self.start(Some(token))
    }

    fn start(&mut self, token: Option<CancellationToken>) -> Result<ZipStream> {
        if self.started {
            return Err(ZipError::GenerationStarted);
        }

        self.started = true;
        Ok(ZipStream::new(self.entries.clone(), std::mem::take(&mut self.contents), token))
    }
}
