//! Asynchronous content resolution: strict ordering and whole-build aborts

use async_trait::async_trait;
use framezip::{build_archive, digest, ContentSource, Entry, ZipError};
use std::io;
use std::sync::{Arc, Mutex};

/// Source that logs when it is read and yields before returning,
/// giving out-of-order resolution every chance to show up.
struct LoggingSource {
    index: usize,
    payload: Vec<u8>,
    log: Arc<Mutex<Vec<usize>>>,
}

#[async_trait]
impl ContentSource for LoggingSource {
    async fn read_content(&self) -> io::Result<Vec<u8>> {
        self.log.lock().unwrap().push(self.index);
        tokio::task::yield_now().await;
        Ok(self.payload.clone())
    }
}

struct FailingSource;

#[async_trait]
impl ContentSource for FailingSource {
    async fn read_content(&self) -> io::Result<Vec<u8>> {
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "frame capture interrupted",
        ))
    }
}

#[tokio::test]
async fn test_sources_resolved_in_input_order() {
    let log = Arc::new(Mutex::new(Vec::new()));

    let entries: Vec<Entry> = (0..8)
        .map(|index| {
            Entry::from_source(
                format!("frame_{index}.jpg"),
                Box::new(LoggingSource {
                    index,
                    payload: vec![index as u8; 16],
                    log: Arc::clone(&log),
                }),
            )
        })
        .collect();

    let bytes = build_archive(&entries).await.unwrap();
    assert_eq!(*log.lock().unwrap(), (0..8).collect::<Vec<_>>());

    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(&bytes[..])).unwrap();
    assert_eq!(archive.len(), 8);
    for index in 0..8 {
        let file = archive.by_index(index).unwrap();
        assert_eq!(file.name(), format!("frame_{index}.jpg"));
        assert_eq!(file.crc32(), digest(&vec![index as u8; 16]));
    }
}

#[tokio::test]
async fn test_failing_source_aborts_whole_build() {
    let entries = vec![
        Entry::from_text("ok.txt", "fine"),
        Entry::from_source("bad.jpg", Box::new(FailingSource)),
        Entry::from_text("never_reached.txt", "fine too"),
    ];

    let err = build_archive(&entries).await.unwrap_err();
    match err {
        ZipError::ContentRead { name, source } => {
            assert_eq!(name, "bad.jpg");
            assert_eq!(source.kind(), io::ErrorKind::UnexpectedEof);
        }
        other => panic!("expected ContentRead, got {other:?}"),
    }
}

#[tokio::test]
async fn test_later_sources_not_read_after_failure() {
    let log = Arc::new(Mutex::new(Vec::new()));

    let entries = vec![
        Entry::from_source(
            "first.jpg",
            Box::new(LoggingSource {
                index: 0,
                payload: vec![1],
                log: Arc::clone(&log),
            }),
        ),
        Entry::from_source("broken.jpg", Box::new(FailingSource)),
        Entry::from_source(
            "after.jpg",
            Box::new(LoggingSource {
                index: 2,
                payload: vec![2],
                log: Arc::clone(&log),
            }),
        ),
    ];

    assert!(build_archive(&entries).await.is_err());
    // Resolution stops at the failure; nothing past it is touched
    assert_eq!(*log.lock().unwrap(), vec![0]);
}
