mod checksum;
mod end_record;
mod entry;
mod format;
mod local_entry;
mod writer;

pub use checksum::digest;
pub use end_record::{EndRecord, END_RECORD_SIGNATURE, END_RECORD_SIZE};
pub use entry::{ContentSource, Entry, EntryContent};
pub use format::{
    write_central_directory, FileRecord, CENTRAL_HEADER_SIGNATURE, CENTRAL_HEADER_SIZE,
    MAX_ENTRY_COUNT, METHOD_STORE, VERSION_MADE_BY, VERSION_NEEDED,
};
pub use local_entry::{
    local_section_len, write_local_section, LOCAL_HEADER_SIGNATURE, LOCAL_HEADER_SIZE,
};
pub use writer::{build_archive, ZipWriter};
