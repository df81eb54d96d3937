// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::ZipEntry;
use crate::write::layout;

/// Computes the exact length of the archive a generation pass over these entries will produce.
///
/// Offsets are accumulated in queue order exactly as the engine writes them, so that offset-driven ZIP64
/// escalation in the central directory is accounted for.
pub(crate) fn predict_size(entries: &[ZipEntry]) -> u64 {
    let mut offset = 0;
    let mut local_header_offsets = Vec::with_capacity(entries.len());

    for entry in entries {
        local_header_offsets.push(offset);
        offset += layout::local_header_len(entry) + entry.size + layout::data_descriptor_len(entry);
    }

    let cd_start = offset;
    let mut cd_size = 0;
    let mut any_entry_zip64 = false;

    for (entry, local_header_offset) in entries.iter().zip(local_header_offsets) {
        any_entry_zip64 |= layout::central_needs_zip64(entry, local_header_offset);
        cd_size += layout::central_header_len(entry, local_header_offset);
    }

    let zip64 = layout::trailer_needs_zip64(entries.len() as u64, cd_start, cd_size, any_entry_zip64);
    tracing::debug!(entries = entries.len(), cd_start, cd_size, zip64, "predicted archive layout");

    cd_start + cd_size + layout::trailer_len(zip64)
}
