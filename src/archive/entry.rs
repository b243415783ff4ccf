use std::borrow::Cow;
use std::fmt;
use std::io;

use async_trait::async_trait;

/// Asynchronous provider of entry content.
///
/// Used when payloads arrive from an external source, such as a capture
/// pipeline handing over encoded frames one at a time. The writer
/// awaits one source at a time, in input order; implementations never
/// see concurrent reads from the same build.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Read the full content into memory.
    async fn read_content(&self) -> io::Result<Vec<u8>>;
}

/// Content of a single archive entry.
pub enum EntryContent {
    /// Raw bytes, stored as-is.
    Bytes(Vec<u8>),
    /// UTF-8 text, encoded to bytes at resolution time.
    Text(String),
    /// Deferred content, resolved by awaiting the source.
    Source(Box<dyn ContentSource>),
}

impl EntryContent {
    /// Resolve to a raw byte sequence.
    ///
    /// Inline variants resolve without suspending; `Source` awaits its
    /// provider. Resolution happens before any encoding step, so the
    /// encoder itself never inspects the content kind.
    pub(crate) async fn resolve(&self) -> io::Result<Cow<'_, [u8]>> {
        match self {
            Self::Bytes(bytes) => Ok(Cow::Borrowed(bytes.as_slice())),
            Self::Text(text) => Ok(Cow::Borrowed(text.as_bytes())),
            Self::Source(source) => source.read_content().await.map(Cow::Owned),
        }
    }
}

impl fmt::Debug for EntryContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Self::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Self::Source(_) => f.write_str("Source(..)"),
        }
    }
}

/// One logical unit to archive: a stored path plus its content.
///
/// The name is stored verbatim; forward slashes express a virtual
/// folder structure. No validation or deduplication is performed, so
/// duplicate names yield duplicate records in the output.
#[derive(Debug)]
pub struct Entry {
    pub name: String,
    pub content: EntryContent,
}

impl Entry {
    /// Entry with raw byte content.
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: EntryContent::Bytes(bytes.into()),
        }
    }

    /// Entry with UTF-8 text content.
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: EntryContent::Text(text.into()),
        }
    }

    /// Entry whose content is produced by an asynchronous source.
    pub fn from_source(name: impl Into<String>, source: Box<dyn ContentSource>) -> Self {
        Self {
            name: name.into(),
            content: EntryContent::Source(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_bytes() {
        let content = EntryContent::Bytes(vec![1, 2, 3]);
        assert_eq!(content.resolve().await.unwrap().as_ref(), &[1, 2, 3]);
    }

    #[tokio::test]
    async fn test_resolve_text_as_utf8() {
        let content = EntryContent::Text("héllo".to_string());
        assert_eq!(content.resolve().await.unwrap().as_ref(), "héllo".as_bytes());
    }

    #[tokio::test]
    async fn test_resolve_source() {
        struct Fixed;

        #[async_trait]
        impl ContentSource for Fixed {
            async fn read_content(&self) -> io::Result<Vec<u8>> {
                Ok(vec![0xAB, 0xCD])
            }
        }

        let content = EntryContent::Source(Box::new(Fixed));
        assert_eq!(content.resolve().await.unwrap().as_ref(), &[0xAB, 0xCD]);
    }
}
