//! # Commands
//!
//! One module per operation. Each `run` takes the pieces of state it needs (the
//! [`Directory`](crate::store::Directory), the [`AssetImporter`](crate::assets::AssetImporter),
//! the renderer) and returns a [`CmdResult`]: the records it touched or listed, any
//! files it produced, and user-facing messages. Commands never print.

use crate::model::StaffRecord;
use std::path::PathBuf;

pub mod add;
pub mod attach;
pub mod duplicate;
pub mod export;
pub mod generate;
pub mod import;
pub mod list;
pub mod remove;
pub mod show;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<StaffRecord>,
    pub listed_records: Vec<StaffRecord>,
    /// Files written: the generated page, backups, exports
    pub paths: Vec<PathBuf>,
    /// Project-relative path of an imported asset
    pub stored_path: Option<String>,
    pub html: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<StaffRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<StaffRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_stored_path(mut self, path: String) -> Self {
        self.stored_path = Some(path);
        self
    }

    pub fn with_html(mut self, html: String) -> Self {
        self.html = Some(html);
        self
    }

    /// Whether any message is a warning or error.
    pub fn has_problems(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}

#[cfg(test)]
pub mod testing {
    use crate::config::SiteConfig;
    use crate::store::memory::InMemoryBackend;
    use crate::store::Directory;
    use tempfile::TempDir;

    /// A project rooted in a temp dir with an in-memory store, plus a second temp dir
    /// standing in for files outside the project.
    pub struct Fixture {
        pub temp: TempDir,
        pub elsewhere: TempDir,
        pub config: SiteConfig,
        pub directory: Directory<InMemoryBackend>,
    }

    pub fn fixture() -> Fixture {
        let temp = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let config = SiteConfig::for_root(temp.path());
        let directory = Directory::load(InMemoryBackend::new(), &config).unwrap();
        Fixture {
            temp,
            elsewhere,
            config,
            directory,
        }
    }

    impl Fixture {
        /// Writes `body` to `relative` under the root and returns the absolute path.
        pub fn file(&self, relative: &str, body: &str) -> std::path::PathBuf {
            let path = self.temp.path().join(relative);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, body).unwrap();
            path
        }

        /// Writes a file outside the project and returns its absolute path.
        pub fn outside(&self, name: &str, body: &str) -> std::path::PathBuf {
            let path = self.elsewhere.path().join(name);
            std::fs::write(&path, body).unwrap();
            path
        }
    }
}
