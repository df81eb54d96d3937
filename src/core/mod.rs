// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Byte-level layouts of every record this crate emits.
//!
//! Each record module exposes a `Raw*` struct holding the fixed-size fields, a wrapper holding any
//! variable-length tail (name, extra field, comment), and a `read`/`write` pair. Variable-length tails
//! are always located through the record's own length fields.

pub mod cdr;
pub mod dd;
pub mod edf;
pub mod eocdr;
pub mod lfh;
pub mod zip64;

/// The length in bytes of a signature. All signatures are u32s, so 4 bytes long.
pub const SIGNATURE_LENGTH: usize = 4;

macro_rules! raw {
    ($name:ident { $($field:ident, $type:ty, $read:expr),* }) => {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name {
            $(pub $field : $type),*
        }

        impl $name {
            /// The length in bytes of the fixed-size fields, excluding the signature.
            pub const LENGTH: usize = 0 $(+ std::mem::size_of::<$type>())*;
        }

        /// Reads the raw underlying header from the front of the given byte slice.
        pub fn raw_read(reader: &mut &[u8]) -> crate::error::Result<$name> {
            Ok($name {
                $($field : $read(reader)? ),*
            })
        }

        /// Writes the raw underlying header to the given buffer.
        pub fn raw_write(buffer: &mut Vec<u8>, raw: &$name) -> crate::error::Result<()> {
            $(buffer.extend(crate::utils::encode_number(u64::from(raw.$field), std::mem::size_of::<$type>())?);)*
            Ok(())
        }
    }
}

macro_rules! raw_deref {
    ($from:ident, $to:ident) => {
        use std::ops::{Deref, DerefMut};

        impl Deref for $from {
            type Target = $to;

            fn deref(&self) -> &Self::Target {
                &self.raw
            }
        }

        impl DerefMut for $from {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.raw
            }
        }
    };
}

pub(crate) use raw;
pub(crate) use raw_deref;
