// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::future::Future;
use std::io::ErrorKind;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_lite::io::{AsyncWrite, AsyncWriteExt};
use futures_lite::stream::{Stream, StreamExt};
use tokio_util::sync::{CancellationToken, WaitForCancellationFutureOwned};

use crate::entry::content::{EntryContent, EntryReader};
use crate::entry::ZipEntry;
use crate::error::{Result, ZipError};
use crate::write::reader::ZipReader;
use crate::write::{layout, record};

/// The size of the buffer entry readers are polled into, and the target size of batched central directory chunks.
pub(crate) const CHUNK_SIZE: usize = 64 * 1024;

#[derive(Clone, Copy, Debug)]
struct EntryRecord {
    local_header_offset: u64,
    crc: u32,
}

/// Offsets and checksums belonging to a single generation pass.
#[derive(Debug, Default)]
struct GenerationState {
    bytes_written: u64,
    cd_start: u64,
    cd_size: u64,
    records: Vec<EntryRecord>,
    zip64: bool,
}

enum Phase {
    LocalHeader { index: usize },
    OwnedData { index: usize, data: Vec<u8> },
    Reading { index: usize, reader: EntryReader, hasher: crc32fast::Hasher, read: u64 },
    CentralDirectory { index: usize },
    Trailer,
    Canceled(String),
    Done,
}

type Next = Poll<Option<Result<Vec<u8>>>>;

/// A pull-driven stream of an archive's bytes.
///
/// Each poll advances generation by at most one step: a local file header, a chunk of entry data, a data
/// descriptor, a batch of central directory records, or the trailer. Entry readers are only polled when the
/// consumer asks for more bytes, so backpressure propagates to them directly.
///
/// Any error is terminal; the failing item is followed by the end of the stream. Dropping the stream, calling
/// [`ZipStream::cancel()`], or triggering the [`CancellationToken`] it was created with drops the active entry
/// reader immediately.
pub struct ZipStream {
    entries: Vec<ZipEntry>,
    contents: std::vec::IntoIter<EntryContent>,
    state: GenerationState,
    phase: Phase,
    buffer: Vec<u8>,
    cancellation: Option<Pin<Box<WaitForCancellationFutureOwned>>>,
}

impl ZipStream {
    pub(crate) fn new(
        entries: Vec<ZipEntry>,
        contents: Vec<EntryContent>,
        cancellation: Option<CancellationToken>,
    ) -> Self {
        tracing::debug!(entries = entries.len(), "starting zip generation");

        Self {
            state: GenerationState { records: Vec::with_capacity(entries.len()), ..Default::default() },
            entries,
            contents: contents.into_iter(),
            phase: Phase::LocalHeader { index: 0 },
            buffer: vec![0; CHUNK_SIZE],
            cancellation: cancellation.map(|token| Box::pin(token.cancelled_owned())),
        }
    }

    /// Returns the number of archive bytes produced so far.
    pub fn bytes_written(&self) -> u64 {
        self.state.bytes_written
    }

    /// Cancels generation, releasing the active entry reader.
    ///
    /// The next poll yields [`ZipError::Cancelled`] with the given reason, after which the stream ends. This has no
    /// effect once the stream has already finished or failed.
    pub fn cancel(&mut self, reason: impl Into<String>) {
        if let Phase::Done | Phase::Canceled(_) = self.phase {
            return;
        }

        let reason = reason.into();
        tracing::warn!(%reason, bytes_written = self.state.bytes_written, "zip generation canceled");

        self.release();
        self.phase = Phase::Canceled(reason);
    }

    /// Pumps the whole archive into a writer, returning the number of bytes written.
    ///
    /// A failure to write releases the active entry reader and ends generation with
    /// [`ZipError::DownstreamWriteError`].
    pub async fn write_to<W>(&mut self, writer: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        while let Some(chunk) = self.next().await {
            let chunk = chunk?;

            if let Err(err) = writer.write_all(&chunk).await {
                tracing::warn!(%err, bytes_written = self.state.bytes_written, "downstream writer failed");
                self.release();
                return Err(ZipError::DownstreamWriteError(err));
            }
        }

        writer.flush().await.map_err(ZipError::DownstreamWriteError)?;
        Ok(self.state.bytes_written)
    }

    /// Pumps the whole archive into a [`tokio`] writer, returning the number of bytes written.
    #[cfg(feature = "tokio")]
    pub async fn write_to_tokio<W>(&mut self, writer: &mut W) -> Result<u64>
    where
        W: tokio::io::AsyncWrite + Unpin,
    {
        use tokio_util::compat::TokioAsyncWriteCompatExt;
        self.write_to(&mut writer.compat_write()).await
    }

    /// Converts this stream into an [`AsyncRead`](futures_lite::io::AsyncRead) implementer.
    pub fn into_reader(self) -> ZipReader {
        ZipReader::new(self)
    }

    /// Converts this stream into a [`tokio`] reader.
    #[cfg(feature = "tokio")]
    pub fn into_tokio_reader(self) -> crate::tokio::ZipReader {
        use tokio_util::compat::FuturesAsyncReadCompatExt;
        self.into_reader().compat()
    }

    fn release(&mut self) {
        self.phase = Phase::Done;
        self.contents = Vec::new().into_iter();
        self.cancellation = None;
    }

    fn fail(&mut self, error: ZipError) -> Next {
        tracing::warn!(%error, bytes_written = self.state.bytes_written, "zip generation failed");
        self.release();
        Poll::Ready(Some(Err(error)))
    }

    fn emit(&mut self, chunk: Vec<u8>, next: Phase) -> Next {
        self.state.bytes_written += chunk.len() as u64;
        self.phase = next;
        Poll::Ready(Some(Ok(chunk)))
    }

    // Returns `None` when the phase changed without producing anything to yield.
    fn advance(&mut self, cx: &mut Context<'_>) -> Option<Next> {
        match std::mem::replace(&mut self.phase, Phase::Done) {
            Phase::LocalHeader { index } => self.local_header(index),
            Phase::OwnedData { index, data } => Some(self.emit(data, Phase::LocalHeader { index: index + 1 })),
            Phase::Reading { index, reader, hasher, read } => self.read_entry(cx, index, reader, hasher, read),
            Phase::CentralDirectory { index } => self.central_directory(index),
            Phase::Trailer => Some(self.trailer()),
            Phase::Canceled(reason) => Some(Poll::Ready(Some(Err(ZipError::Cancelled(reason))))),
            Phase::Done => Some(Poll::Ready(None)),
        }
    }

    fn local_header(&mut self, index: usize) -> Option<Next> {
        let Some(entry) = self.entries.get(index) else {
            self.state.cd_start = self.state.bytes_written;
            tracing::debug!(cd_start = self.state.cd_start, "local entries written");
            self.phase = Phase::CentralDirectory { index: 0 };
            return None;
        };

        let local_header_offset = self.state.bytes_written;
        let (crc, next) = match self.contents.next().unwrap_or(EntryContent::Empty) {
            EntryContent::Empty => (0, Phase::LocalHeader { index: index + 1 }),
            EntryContent::Owned(data) if data.is_empty() => (0, Phase::LocalHeader { index: index + 1 }),
            EntryContent::Owned(data) => (crc32fast::hash(&data), Phase::OwnedData { index, data }),
            EntryContent::Reader(reader) => {
                (0, Phase::Reading { index, reader, hasher: crc32fast::Hasher::new(), read: 0 })
            }
        };

        let header = match record::local_file_header(entry, crc).and_then(|header| header.as_bytes()) {
            Ok(header) => header,
            Err(err) => return Some(self.fail(err)),
        };

        self.state.records.push(EntryRecord { local_header_offset, crc });
        Some(self.emit(header, next))
    }

    fn read_entry(
        &mut self,
        cx: &mut Context<'_>,
        index: usize,
        mut reader: EntryReader,
        mut hasher: crc32fast::Hasher,
        read: u64,
    ) -> Option<Next> {
        let entry = &self.entries[index];

        match reader.as_mut().poll_read(cx, &mut self.buffer[..]) {
            Poll::Pending => {
                self.phase = Phase::Reading { index, reader, hasher, read };
                Some(Poll::Pending)
            }
            // Yield back to the executor rather than spinning on a reader that keeps getting interrupted.
            Poll::Ready(Err(err)) if err.kind() == ErrorKind::Interrupted => {
                self.phase = Phase::Reading { index, reader, hasher, read };
                cx.waker().wake_by_ref();
                Some(Poll::Pending)
            }
            Poll::Ready(Err(err)) => Some(self.fail(ZipError::UpstreamReadError(err))),
            Poll::Ready(Ok(0)) => {
                if read != entry.size {
                    let error = ZipError::SizeMismatch { name: entry.filename.clone(), declared: entry.size, actual: read };
                    return Some(self.fail(error));
                }

                let crc = hasher.finalize();
                let descriptor = match record::data_descriptor(entry, crc).and_then(|dd| dd.as_bytes()) {
                    Ok(descriptor) => descriptor,
                    Err(err) => return Some(self.fail(err)),
                };

                self.state.records[index].crc = crc;
                Some(self.emit(descriptor, Phase::LocalHeader { index: index + 1 }))
            }
            Poll::Ready(Ok(length)) => {
                let read = read + length as u64;
                if read > entry.size {
                    let error = ZipError::SizeMismatch { name: entry.filename.clone(), declared: entry.size, actual: read };
                    return Some(self.fail(error));
                }

                let chunk = self.buffer[..length].to_vec();
                hasher.update(&chunk);
                Some(self.emit(chunk, Phase::Reading { index, reader, hasher, read }))
            }
        }
    }

    fn central_directory(&mut self, mut index: usize) -> Option<Next> {
        if index >= self.entries.len() {
            self.phase = Phase::Trailer;
            return None;
        }

        let mut chunk = Vec::new();

        while index < self.entries.len() && chunk.len() < CHUNK_SIZE {
            let entry = &self.entries[index];
            let EntryRecord { local_header_offset, crc } = self.state.records[index];

            if layout::central_needs_zip64(entry, local_header_offset) {
                tracing::debug!(name = %entry.filename, local_header_offset, "central directory record uses zip64");
                self.state.zip64 = true;
            }

            let written = record::central_directory_record(entry, crc, local_header_offset)
                .and_then(|cdr| crate::core::cdr::write(&mut chunk, &cdr));
            if let Err(err) = written {
                return Some(self.fail(err));
            }

            index += 1;
        }

        self.state.cd_size += chunk.len() as u64;
        Some(self.emit(chunk, Phase::CentralDirectory { index }))
    }

    fn trailer(&mut self) -> Next {
        let GenerationState { cd_start, cd_size, zip64, .. } = self.state;
        let entries = self.entries.len() as u64;
        let zip64 = layout::trailer_needs_zip64(entries, cd_start, cd_size, zip64);

        match record::trailer(entries, cd_start, cd_size, zip64) {
            Ok(trailer) => {
                tracing::debug!(cd_size, zip64, total = self.state.bytes_written + trailer.len() as u64, "zip generation complete");
                self.cancellation = None;
                self.emit(trailer, Phase::Done)
            }
            Err(err) => self.fail(err),
        }
    }
}

impl Stream for ZipStream {
    type Item = Result<Vec<u8>>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if let Some(cancelled) = this.cancellation.as_mut() {
            if cancelled.as_mut().poll(cx).is_ready() {
                this.cancel("cancellation token was triggered");
            }
        }

        loop {
            if let Some(next) = this.advance(cx) {
                return next;
            }
        }
    }
}

impl std::fmt::Debug for ZipStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipStream")
            .field("entries", &self.entries.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
