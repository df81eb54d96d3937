// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A set of [`tokio`]-specific type aliases and features.
//!
//! # Usage
//! With the `tokio` feature enabled, the following additional methods become available for use with [`tokio`]'s IO
//! traits. These methods internally implement conversion between the required async IO traits.
//! - [`ZipEntryBuilder::tokio_reader()`]
//! - [`ZipStream::write_to_tokio()`]
//! - [`ZipStream::into_tokio_reader()`]
//!
//! The reader returned by the latter contains a wrapping compatibility type provided by an external crate which
//! cannot be named unless you also pull in the [`tokio_util`] dependency manually. This is why we've provided a type
//! alias within this module so that it can be named without needing to pull in a separate dependency.

#[cfg(doc)]
use crate::{ZipEntryBuilder, ZipStream};
#[cfg(doc)]
use tokio;
#[cfg(doc)]
use tokio_util;

use tokio_util::compat::Compat;

/// A [`tokio`]-specific type alias for [`crate::write::ZipReader`].
pub type ZipReader = Compat<crate::write::ZipReader>;
