use crate::archive::format::{FileRecord, METHOD_STORE, VERSION_NEEDED};
use crate::error::Result;
use std::io::Write;

/// Local file header signature ("PK\x03\x04")
pub const LOCAL_HEADER_SIGNATURE: u32 = 0x0403_4B50;

/// Fixed portion of a local file header in bytes
pub const LOCAL_HEADER_SIZE: usize = 30;

/// Write one entry's complete local-file section: the 30-byte header,
/// the stored name, then the raw content. Returns the section length.
///
/// `record` must describe `content` — matching CRC and size — which
/// holds because the writer derives the record from the content
/// immediately before calling this.
pub fn write_local_section<W: Write>(
    mut writer: W,
    record: &FileRecord,
    content: &[u8],
) -> Result<usize> {
    writer.write_all(&LOCAL_HEADER_SIGNATURE.to_le_bytes())?;
    writer.write_all(&VERSION_NEEDED.to_le_bytes())?;
    writer.write_all(&0u16.to_le_bytes())?; // general purpose flags
    writer.write_all(&METHOD_STORE.to_le_bytes())?;
    writer.write_all(&0u16.to_le_bytes())?; // last-mod time
    writer.write_all(&0u16.to_le_bytes())?; // last-mod date
    writer.write_all(&record.crc32.to_le_bytes())?;
    writer.write_all(&record.size.to_le_bytes())?; // compressed size
    writer.write_all(&record.size.to_le_bytes())?; // uncompressed size
    writer.write_all(&(record.name.len() as u16).to_le_bytes())?;
    writer.write_all(&0u16.to_le_bytes())?; // extra field length
    writer.write_all(&record.name)?;
    writer.write_all(content)?;

    Ok(local_section_len(record.name.len(), content.len()))
}

/// Total byte length of an entry's local-file section.
pub fn local_section_len(name_len: usize, content_len: usize) -> usize {
    LOCAL_HEADER_SIZE + name_len + content_len
}
