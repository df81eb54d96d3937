// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! An asynchronous, store-only ZIP archive streamer with exact size prediction.
//!
//! ## Features
//! - A runtime-agnostic, pull-driven archive stream built on `futures-lite`, with optional `tokio` adapters.
//! - Entries backed by in-memory data or by readers of a declared length, checksummed as they stream.
//! - Automatic ZIP64 escalation per record, driven by sizes, offsets, and entry counts.
//! - Exact prediction of the archive's length before any bytes are produced.
//! - Cooperative cancellation through [`tokio_util::sync::CancellationToken`].
//!
//! [Read more.](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT)
//!
//! ## Example
//! ```no_run
//! # use async_zipper::{ZipEntryBuilder, Zipper};
//! # use async_zipper::error::ZipError;
//! # use futures_lite::StreamExt;
//! #
//! # async fn run() -> Result<(), ZipError> {
//! let mut zipper = Zipper::new();
//! zipper.add(ZipEntryBuilder::new("hello.txt").data(b"Hello, world!".to_vec()))?;
//!
//! let mut stream = zipper.stream()?;
//! while let Some(chunk) = stream.next().await {
//!     let chunk = chunk?;
//!     // Send the chunk on its way.
//! }
//! #   Ok(())
//! # }
//! ```

pub mod core;
pub mod error;
pub mod write;

#[cfg(feature = "tokio")]
pub mod tokio;

pub(crate) mod date;
pub(crate) mod entry;
pub(crate) mod spec;
pub(crate) mod utils;


pub use crate::date::{builder::ZipDateTimeBuilder, ZipDateTime};
pub use crate::entry::{builder::ZipEntryBuilder, content::EntryReader, name::MAX_NAME_LENGTH, ZipEntry};
pub use crate::spec::{AttributeCompatibility, GeneralPurposeFlag};
pub use crate::utils::encode_number;
pub use crate::write::{ZipReader, ZipStream, Zipper};

pub use tokio_util::sync::CancellationToken;
