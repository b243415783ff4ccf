//! framezip: in-memory store-only ZIP writer for frame capture bundles
//!
//! Packages an ordered list of named payloads into a single
//! ZIP-compatible byte buffer without any external archiving library.
//! Entries are stored uncompressed, so output is deterministic and
//! byte-for-byte readable by any standard archive tool.
//!
//! # Example
//!
//! ```
//! use framezip::{build_archive, Entry};
//!
//! # async fn demo() -> framezip::Result<()> {
//! let entries = vec![
//!     Entry::from_bytes("capture/frame_0m01s.jpg", vec![0xFF, 0xD8, 0xFF]),
//!     Entry::from_text("capture/info.txt", "1 frame captured"),
//! ];
//! let archive = build_archive(&entries).await?;
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod archive;
pub mod capture;
pub mod error;

// Re-export commonly used types
pub use archive::{
    build_archive, digest, ContentSource, EndRecord, Entry, EntryContent, FileRecord, ZipWriter,
    CENTRAL_HEADER_SIZE, END_RECORD_SIZE, LOCAL_HEADER_SIZE, MAX_ENTRY_COUNT,
};
pub use capture::{format_timestamp, CaptureBundle, FrameShot};
pub use error::{Result, ZipError};
