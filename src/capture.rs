//! Capture bundle assembly
//!
//! Turns one chunk of a frame-capture session into the entry list the
//! archive writer consumes: the captured frames under a virtual folder
//! named after the capture window, plus a trailing `info.txt`
//! describing the session.
//!
//! The crate never reads the wall clock. The human-readable capture
//! time is supplied by the caller, so building the same bundle twice
//! yields byte-identical archives.

use crate::archive::Entry;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Format a position in seconds as a compact timestamp.
///
/// Under an hour: `3m07s`. An hour or more: `1h02m03s`. Fractions are
/// truncated; negative inputs clamp to zero.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hrs = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hrs > 0 {
        format!("{hrs}h{mins:02}m{secs:02}s")
    } else {
        format!("{mins}m{secs:02}s")
    }
}

/// One captured frame: its position in the video and the encoded image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameShot {
    /// Capture position in seconds from the start of the video.
    pub time: f64,
    /// File name within the bundle folder.
    pub file_name: String,
    /// Encoded image payload (JPEG as captured).
    pub data: Vec<u8>,
}

impl FrameShot {
    /// Frame named after its capture position, `screenshot_{time}.jpg`.
    pub fn new(time: f64, data: Vec<u8>) -> Self {
        Self {
            time,
            file_name: format!("screenshot_{}.jpg", format_timestamp(time)),
            data,
        }
    }
}

/// One chunk of a capture session, ready to be bundled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureBundle {
    /// Capture window start, in seconds.
    pub start_time: f64,
    /// Capture window end, in seconds.
    pub end_time: f64,
    /// 1-based position of this chunk within the session.
    pub chunk: u32,
    /// Total chunks in the session.
    pub total_chunks: u32,
    /// Human-readable capture time, supplied by the caller.
    pub captured_at: String,
    /// Frames in capture order.
    pub frames: Vec<FrameShot>,
}

impl CaptureBundle {
    /// Virtual folder holding this chunk's files.
    pub fn folder_name(&self) -> String {
        format!(
            "screenshots_{}_to_{}",
            format_timestamp(self.start_time),
            format_timestamp(self.end_time)
        )
    }

    /// Body of the bundle's `info.txt`: the capture window, counts,
    /// chunk position, and one line per frame.
    pub fn info_text(&self) -> String {
        let frame_list = self
            .frames
            .iter()
            .map(|frame| format!("{} ({})", frame.file_name, format_timestamp(frame.time)))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Screenshot Capture\n\
             \n\
             Capture Information:\n\
             - Start Time: {}\n\
             - End Time: {}\n\
             - Total Screenshots: {}\n\
             - Chunk: {} of {}\n\
             - Captured: {}\n\
             \n\
             Screenshot List:\n\
             {}\n",
            format_timestamp(self.start_time),
            format_timestamp(self.end_time),
            self.frames.len(),
            self.chunk,
            self.total_chunks,
            self.captured_at,
            frame_list
        )
    }

    /// Suggested download name for this chunk's archive.
    ///
    /// Single-chunk sessions get `{stem}.zip`; chunked sessions get
    /// `{stem}_chunk{N}_of_{M}.zip`.
    pub fn archive_file_name(&self, stem: &str) -> String {
        if self.total_chunks > 1 {
            format!("{stem}_chunk{}_of_{}.zip", self.chunk, self.total_chunks)
        } else {
            format!("{stem}.zip")
        }
    }

    /// Entry list for the archive writer: every frame under the bundle
    /// folder, in capture order, then `info.txt`.
    pub fn into_entries(self) -> Vec<Entry> {
        let folder = self.folder_name();
        let info = self.info_text();

        let mut entries: Vec<Entry> = self
            .frames
            .into_iter()
            .map(|frame| Entry::from_bytes(format!("{folder}/{}", frame.file_name), frame.data))
            .collect();
        entries.push(Entry::from_text(format!("{folder}/info.txt"), info));
        entries
    }

    /// Bundle this chunk into a complete archive.
    pub async fn build(self) -> Result<Vec<u8>> {
        let entries = self.into_entries();
        crate::archive::build_archive(&entries).await
    }
}
