use super::StoreBackend;
use crate::error::Result;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data, but remembers the last write and counts them.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    contents: Option<String>,
    writes: usize,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from existing serialized contents, as if loaded from disk.
    pub fn with_contents(contents: &str) -> Self {
        Self {
            contents: Some(contents.to_string()),
            writes: 0,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StoreBackend for InMemoryBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        self.contents = Some(contents.to_string());
        self.writes += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("<memory>")
    }
}
