// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use chrono::{DateTime, Utc};
use futures_lite::io::AsyncRead;

use crate::date::ZipDateTime;
use crate::entry::content::{EntryContent, EntryReader};
use crate::entry::ZipEntry;
use crate::error::{Result, ZipError};
use crate::spec::attribute::external_file_attribute;

/// A builder for [`ZipEntry`].
///
/// Names ending in `/` describe directories, which may carry neither data nor a size. A file takes at most one of
/// [`data()`](Self::data) or [`reader()`](Self::reader), and a reader must be accompanied by a declared
/// [`size()`](Self::size). Any other combination is rejected when the entry is added to a [`Zipper`](crate::Zipper).
pub struct ZipEntryBuilder {
    filename: String,
    data: Option<Vec<u8>>,
    reader: Option<EntryReader>,
    size: Option<u64>,
    last_modification_date: Option<ZipDateTime>,
    unix_permissions: Option<u32>,
    readonly: bool,
}

impl ZipEntryBuilder {
    /// Constructs a new builder for an entry with the given archive-relative name.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            data: None,
            reader: None,
            size: None,
            last_modification_date: None,
            unix_permissions: None,
            readonly: false,
        }
    }

    /// Sets the entry's data to an in-memory buffer.
    pub fn data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Sets the entry's data to be pulled from a reader during generation.
    pub fn reader(mut self, reader: impl AsyncRead + Send + 'static) -> Self {
        self.reader = Some(Box::pin(reader));
        self
    }

    /// Sets the entry's data to be pulled from a [`tokio`] reader during generation.
    #[cfg(feature = "tokio")]
    pub fn tokio_reader(self, reader: impl tokio::io::AsyncRead + Send + 'static) -> Self {
        use tokio_util::compat::TokioAsyncReadCompatExt;
        self.reader(reader.compat())
    }

    /// Sets the exact number of bytes the entry's reader will produce.
    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the entry's last modification date.
    pub fn last_modification_date(mut self, date: DateTime<Utc>) -> Self {
        self.last_modification_date = Some(ZipDateTime::from_chrono(&date));
        self
    }

    /// Sets the entry's last modification date from an already-encoded MS-DOS date & time.
    ///
    /// See [`ZipDateTimeBuilder`](crate::ZipDateTimeBuilder) for building one from individual components.
    pub fn zip_date_time(mut self, date: ZipDateTime) -> Self {
        self.last_modification_date = Some(date);
        self
    }

    /// Sets the entry's POSIX permission bits. Only the lower nine bits are kept.
    pub fn unix_permissions(mut self, mode: u32) -> Self {
        self.unix_permissions = Some(mode);
        self
    }

    /// Marks the entry as read-only, clearing its write permissions.
    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Validates the builder's name and content, splitting it into the entry's metadata and its data.
    pub(crate) fn build(self) -> Result<(ZipEntry, EntryContent)> {
        crate::entry::name::validate(&self.filename)?;

        let dir = self.filename.ends_with('/');
        let (content, size) = match (dir, self.data, self.reader, self.size) {
            (true, None, None, None) => (EntryContent::Empty, 0),
            (true, _, _, _) => return Err(ZipError::InvalidEntryContent("a directory cannot carry data or a size")),
            (false, None, None, None) => (EntryContent::Empty, 0),
            (false, Some(data), None, None) => {
                let size = data.len() as u64;
                (EntryContent::Owned(data), size)
            }
            (false, None, Some(reader), Some(size)) => (EntryContent::Reader(reader), size),
            (false, Some(_), Some(_), _) => {
                return Err(ZipError::InvalidEntryContent("an entry cannot take both data and a reader"))
            }
            (false, Some(_), None, Some(_)) => {
                return Err(ZipError::InvalidEntryContent("a size cannot be declared alongside in-memory data"))
            }
            (false, None, Some(_), None) => return Err(ZipError::InvalidEntryContent("a reader requires a declared size")),
            (false, None, None, Some(_)) => return Err(ZipError::InvalidEntryContent("a size was declared without a reader")),
        };

        let streamed = matches!(content, EntryContent::Reader(_));
        let external_file_attribute = external_file_attribute(dir, self.unix_permissions, self.readonly);

        let entry = ZipEntry {
            filename: self.filename,
            dir,
            size,
            streamed,
            last_modification_date: self.last_modification_date,
            unix_permissions: (external_file_attribute >> 16) & 0o777,
            readonly: self.readonly,
            external_file_attribute,
        };

        Ok((entry, content))
    }
}

impl std::fmt::Debug for ZipEntryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipEntryBuilder")
            .field("filename", &self.filename)
            .field("data", &self.data.as_ref().map(Vec::len))
            .field("reader", &self.reader.is_some())
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
