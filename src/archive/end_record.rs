use crate::error::Result;
use std::io::Write;

/// End of central directory signature ("PK\x05\x06")
pub const END_RECORD_SIGNATURE: u32 = 0x0605_4B50;

/// End record size in bytes (fixed; the comment field is always empty)
pub const END_RECORD_SIZE: usize = 22;

/// End of Central Directory Record
///
/// Fixed-size trailer closing the archive. It identifies the central
/// directory's position and size and the total entry count, so readers
/// can locate entries starting from the end of the file.
///
/// Structure (22 bytes, all little-endian):
/// - Signature: 0x06054B50 (4 bytes)
/// - Disk number: uint16 (2 bytes)
/// - Disk with central directory: uint16 (2 bytes)
/// - Entries on this disk: uint16 (2 bytes)
/// - Total entries: uint16 (2 bytes)
/// - Central directory size: uint32 (4 bytes)
/// - Central directory offset: uint32 (4 bytes)
/// - Comment length: uint16 (2 bytes)
#[derive(Debug, Clone)]
pub struct EndRecord {
    pub entry_count: u16,
    pub central_directory_size: u32,
    pub central_directory_offset: u32,
}

impl EndRecord {
    pub fn new(
        entry_count: u16,
        central_directory_size: u32,
        central_directory_offset: u32,
    ) -> Self {
        Self {
            entry_count,
            central_directory_size,
            central_directory_offset,
        }
    }

    /// Write end record to a writer
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<usize> {
        writer.write_all(&END_RECORD_SIGNATURE.to_le_bytes())?;
        writer.write_all(&0u16.to_le_bytes())?; // disk number
        writer.write_all(&0u16.to_le_bytes())?; // disk with central directory
        writer.write_all(&self.entry_count.to_le_bytes())?; // entries on this disk
        writer.write_all(&self.entry_count.to_le_bytes())?; // total entries
        writer.write_all(&self.central_directory_size.to_le_bytes())?;
        writer.write_all(&self.central_directory_offset.to_le_bytes())?;
        writer.write_all(&0u16.to_le_bytes())?; // comment length

        Ok(END_RECORD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_record_layout() {
        let record = EndRecord::new(10, 3200, 1024);

        let mut buf = Vec::new();
        let written = record.write_to(&mut buf).unwrap();

        assert_eq!(written, END_RECORD_SIZE);
        assert_eq!(buf.len(), END_RECORD_SIZE);

        // Signature, little-endian
        assert_eq!(&buf[0..4], &[0x50, 0x4B, 0x05, 0x06]);
        // Disk fields are zero
        assert_eq!(&buf[4..8], &[0u8; 4]);
        // Entry count appears twice: this disk and total
        assert_eq!(&buf[8..10], &10u16.to_le_bytes());
        assert_eq!(&buf[10..12], &10u16.to_le_bytes());
        // Directory size and offset
        assert_eq!(&buf[12..16], &3200u32.to_le_bytes());
        assert_eq!(&buf[16..20], &1024u32.to_le_bytes());
        // Empty comment
        assert_eq!(&buf[20..22], &0u16.to_le_bytes());
    }

    #[test]
    fn test_zero_entries() {
        let record = EndRecord::new(0, 0, 0);

        let mut buf = Vec::new();
        record.write_to(&mut buf).unwrap();

        assert_eq!(buf.len(), END_RECORD_SIZE);
        assert_eq!(&buf[4..20], &[0u8; 16]);
    }
}
