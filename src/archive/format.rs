use crate::error::Result;
use std::io::Write;

/// Central directory header signature ("PK\x01\x02")
pub const CENTRAL_HEADER_SIGNATURE: u32 = 0x0201_4B50;

/// Fixed portion of a central directory header in bytes
pub const CENTRAL_HEADER_SIZE: usize = 46;

/// Version fields are pinned to 2.0, the baseline for stored entries
pub const VERSION_MADE_BY: u16 = 20;
pub const VERSION_NEEDED: u16 = 20;

/// Store method (content embedded uncompressed)
pub const METHOD_STORE: u16 = 0;

/// Maximum entry count expressible in the 16-bit trailer fields
pub const MAX_ENTRY_COUNT: usize = u16::MAX as usize;

/// Bookkeeping metadata for one encoded entry.
///
/// Produced while the entry's local-file section is written and
/// consumed when the central directory is built; never mutated in
/// between. Records keep the same relative order as their entries.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Stored path, already encoded to bytes.
    pub name: Vec<u8>,
    pub crc32: u32,
    /// Content length. Compressed and uncompressed sizes coincide
    /// because entries are stored, not compressed.
    pub size: u32,
    /// Byte offset of this entry's local header within the archive.
    pub local_header_offset: u32,
}

impl FileRecord {
    /// Write this record's central directory header followed by the
    /// stored name. Returns the number of bytes written.
    ///
    /// The caller guarantees the name length fits the 16-bit field; the
    /// writer rejects longer names before a record is ever created.
    pub fn write_central_to<W: Write>(&self, mut writer: W) -> Result<usize> {
        writer.write_all(&CENTRAL_HEADER_SIGNATURE.to_le_bytes())?;
        writer.write_all(&VERSION_MADE_BY.to_le_bytes())?;
        writer.write_all(&VERSION_NEEDED.to_le_bytes())?;
        // General purpose flags. The UTF-8 name flag (bit 11) is
        // deliberately left clear, also for non-ASCII paths.
        writer.write_all(&0u16.to_le_bytes())?;
        writer.write_all(&METHOD_STORE.to_le_bytes())?;
        // Last-mod time and date carry no timestamp semantics
        writer.write_all(&0u16.to_le_bytes())?;
        writer.write_all(&0u16.to_le_bytes())?;
        writer.write_all(&self.crc32.to_le_bytes())?;
        writer.write_all(&self.size.to_le_bytes())?; // compressed size
        writer.write_all(&self.size.to_le_bytes())?; // uncompressed size
        writer.write_all(&(self.name.len() as u16).to_le_bytes())?;
        writer.write_all(&0u16.to_le_bytes())?; // extra field length
        writer.write_all(&0u16.to_le_bytes())?; // comment length
        writer.write_all(&0u16.to_le_bytes())?; // disk number start
        writer.write_all(&0u16.to_le_bytes())?; // internal attributes
        writer.write_all(&0u32.to_le_bytes())?; // external attributes
        writer.write_all(&self.local_header_offset.to_le_bytes())?;
        writer.write_all(&self.name)?;

        Ok(CENTRAL_HEADER_SIZE + self.name.len())
    }

    /// Size of this record's central directory header when written.
    pub fn central_size(&self) -> usize {
        CENTRAL_HEADER_SIZE + self.name.len()
    }
}

/// Write the central directory for `records`, in encoding order.
///
/// Returns the total byte length of the directory, which the end
/// record stores alongside its starting offset.
pub fn write_central_directory<W: Write>(mut writer: W, records: &[FileRecord]) -> Result<usize> {
    let mut written = 0;
    for record in records {
        written += record.write_central_to(&mut writer)?;
    }
    Ok(written)
}
