// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod builder;
pub(crate) mod content;
pub mod name;

use crate::date::ZipDateTime;
use crate::spec::attribute::AttributeCompatibility;
use crate::spec::GeneralPurposeFlag;

/// An immutable store of data about a queued ZIP entry.
///
/// This type cannot be directly constructed so instead, the [`ZipEntryBuilder`] must be used. Once an entry has been
/// admitted to a [`Zipper`], none of its metadata can change.
///
/// [`ZipEntryBuilder`]: crate::ZipEntryBuilder
/// [`Zipper`]: crate::Zipper
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZipEntry {
    pub(crate) filename: String,
    pub(crate) dir: bool,
    pub(crate) size: u64,
    pub(crate) streamed: bool,
    pub(crate) last_modification_date: Option<ZipDateTime>,
    pub(crate) unix_permissions: u32,
    pub(crate) readonly: bool,
    pub(crate) external_file_attribute: u32,
}

impl ZipEntry {
    /// Returns the entry's filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns whether or not the entry represents a directory.
    pub fn dir(&self) -> bool {
        self.dir
    }

    /// Returns the entry's size in bytes.
    ///
    /// For data held in memory this is the data's length; for readers it is the declared length.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns whether the entry's data is pulled from a reader, and so followed by a data descriptor.
    pub fn streamed(&self) -> bool {
        self.streamed
    }

    /// Returns the entry's last modification time & date, if one was provided.
    pub fn last_modification_date(&self) -> Option<&ZipDateTime> {
        self.last_modification_date.as_ref()
    }

    /// Returns the entry's POSIX permission bits, after any read-only adjustment.
    pub fn unix_permissions(&self) -> u32 {
        self.unix_permissions
    }

    /// Returns whether the entry was marked read-only.
    pub fn readonly(&self) -> bool {
        self.readonly
    }

    /// Returns the entry's attribute host compatibility.
    pub fn attribute_compatibility(&self) -> AttributeCompatibility {
        AttributeCompatibility::Unix
    }

    /// Returns the entry's external file attribute.
    pub fn external_file_attribute(&self) -> u32 {
        self.external_file_attribute
    }

    /// Returns the general purpose flags this entry's headers carry.
    pub fn general_purpose_flag(&self) -> GeneralPurposeFlag {
        GeneralPurposeFlag {
            data_descriptor: self.streamed,
            filename_unicode: self.filename.bytes().any(|byte| byte >= 0x80),
        }
    }
}
