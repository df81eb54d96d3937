// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::{Error, ErrorKind};
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_lite::io::AsyncRead;
use futures_lite::ready;
use futures_lite::stream::Stream;
use pin_project::pin_project;

use crate::write::stream::ZipStream;

/// An [`AsyncRead`] implementer over a [`ZipStream`].
///
/// Generation errors surface as [`std::io::Error`]s wrapping the original [`ZipError`](crate::error::ZipError).
#[pin_project(project = ZipReaderProj)]
pub struct ZipReader {
    #[pin]
    stream: ZipStream,
    chunk: Vec<u8>,
    position: usize,
}

impl ZipReader {
    pub(crate) fn new(stream: ZipStream) -> Self {
        Self { stream, chunk: Vec::new(), position: 0 }
    }

    /// Returns a reference to the inner stream.
    pub fn get_ref(&self) -> &ZipStream {
        &self.stream
    }

    /// Returns a mutable reference to the inner stream, for example to cancel it.
    pub fn get_mut(&mut self) -> &mut ZipStream {
        &mut self.stream
    }
}

impl AsyncRead for ZipReader {
    fn poll_read(self: Pin<&mut Self>, cx: &mut Context<'_>, buf: &mut [u8]) -> Poll<Result<usize, Error>> {
        let mut this: ZipReaderProj<'_> = self.project();

        loop {
            let remaining = &this.chunk[*this.position..];
            if !remaining.is_empty() {
                let length = remaining.len().min(buf.len());
                buf[..length].copy_from_slice(&remaining[..length]);
                *this.position += length;
                return Poll::Ready(Ok(length));
            }

            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(Ok(chunk)) => {
                    *this.chunk = chunk;
                    *this.position = 0;
                }
                Some(Err(err)) => return Poll::Ready(Err(Error::new(ErrorKind::Other, err))),
                None => return Poll::Ready(Ok(0)),
            }
        }
    }
}
