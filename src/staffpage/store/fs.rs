use super::StoreBackend;
use crate::error::{Result, StaffError};
use std::fs;
use std::path::{Path, PathBuf};

/// The store as a single pretty-printed JSON file.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StaffError::Io)?;
            }
        }
        Ok(())
    }
}

impl StoreBackend for JsonFileBackend {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(StaffError::Io)?;
        Ok(Some(content))
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        self.ensure_parent()?;
        fs::write(&self.path, contents).map_err(StaffError::Io)?;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
