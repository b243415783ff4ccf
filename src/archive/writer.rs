use crate::archive::checksum;
use crate::archive::end_record::EndRecord;
use crate::archive::entry::Entry;
use crate::archive::format::{write_central_directory, FileRecord, MAX_ENTRY_COUNT};
use crate::archive::local_entry::{local_section_len, write_local_section};
use crate::error::{Result, ZipError};
use tracing::debug;

/// In-memory writer producing store-only ZIP archives.
///
/// Local-file sections accumulate in an internal buffer as entries are
/// added; [`finish`](ZipWriter::finish) appends the central directory
/// and end record and hands back the complete archive. The running
/// offset for the next entry is always the buffer length, so offset
/// bookkeeping carries no state beyond the writer itself.
///
/// The whole archive is buffered in memory before being returned,
/// which bounds practical archive size to available memory.
#[derive(Debug, Default)]
pub struct ZipWriter {
    sections: Vec<u8>,
    records: Vec<FileRecord>,
}

impl ZipWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries encoded so far.
    pub fn entry_count(&self) -> usize {
        self.records.len()
    }

    /// Bookkeeping records for the entries encoded so far, in order.
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Resolve and encode one entry.
    ///
    /// Entries must be added in their final order: each local header
    /// offset is the exact byte length of everything written before it.
    /// Content sources are therefore awaited here one at a time, never
    /// concurrently. Any failure leaves the writer untouched — no
    /// partial local-file section is ever emitted.
    pub async fn add_entry(&mut self, entry: &Entry) -> Result<()> {
        if self.records.len() >= MAX_ENTRY_COUNT {
            return Err(ZipError::EntryCountOverflow(self.records.len() + 1));
        }

        let content = entry.content.resolve().await.map_err(|source| {
            ZipError::ContentRead {
                name: entry.name.clone(),
                source,
            }
        })?;

        let name = entry.name.as_bytes();
        if name.len() > u16::MAX as usize {
            return Err(ZipError::SizeOverflow(format!(
                "name of entry '{}' is {} bytes (max {})",
                entry.name,
                name.len(),
                u16::MAX
            )));
        }

        let size = u32::try_from(content.len()).map_err(|_| {
            ZipError::SizeOverflow(format!(
                "entry '{}' is {} bytes, beyond the 32-bit size field",
                entry.name,
                content.len()
            ))
        })?;

        // The section must also end within 32-bit range: the central
        // directory offset and every later local header offset are
        // stored as uint32.
        let offset = self.sections.len() as u64;
        let section_len = local_section_len(name.len(), content.len());
        if offset + section_len as u64 > u64::from(u32::MAX) {
            return Err(ZipError::SizeOverflow(format!(
                "archive reaches {} bytes at entry '{}', beyond the 32-bit offset field",
                offset + section_len as u64,
                entry.name
            )));
        }

        let record = FileRecord {
            name: name.to_vec(),
            crc32: checksum::digest(&content),
            size,
            local_header_offset: offset as u32,
        };

        let written = write_local_section(&mut self.sections, &record, &content)?;
        debug_assert_eq!(written, section_len);

        debug!(
            name = %entry.name,
            size,
            offset = record.local_header_offset,
            "entry encoded"
        );
        self.records.push(record);
        Ok(())
    }

    /// Append the central directory and end record, returning the
    /// complete archive.
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut archive = self.sections;
        // Fits in u32: add_entry bounds every section end
        let central_directory_offset = archive.len() as u32;

        let directory_len = write_central_directory(&mut archive, &self.records)?;
        let directory_size = u32::try_from(directory_len).map_err(|_| {
            ZipError::SizeOverflow(format!(
                "central directory is {directory_len} bytes, beyond the 32-bit size field"
            ))
        })?;

        let end = EndRecord::new(
            self.records.len() as u16,
            directory_size,
            central_directory_offset,
        );
        end.write_to(&mut archive)?;

        debug!(
            entries = self.records.len(),
            bytes = archive.len(),
            "archive finished"
        );
        Ok(archive)
    }
}

/// Build a complete archive from `entries`, in order.
///
/// This is the one entry point the surrounding capture pipeline calls:
/// the entry-count limit is checked before any bytes are emitted,
/// content is resolved strictly in input order, and any failure aborts
/// the whole build with no partial output.
pub async fn build_archive(entries: &[Entry]) -> Result<Vec<u8>> {
    if entries.len() > MAX_ENTRY_COUNT {
        return Err(ZipError::EntryCountOverflow(entries.len()));
    }

    let mut writer = ZipWriter::new();
    for entry in entries {
        writer.add_entry(entry).await?;
    }
    writer.finish()
}
