//! Writes the generated page, keeping a timestamped copy of whatever it replaces.
//!
//! Backups are named `<page stem>.<YYYYmmdd-HHMMSS>.html` inside the backup folder, so
//! a plain name sort is also a chronological sort. With no retention configured the
//! folder grows without bound.

use crate::config::SiteConfig;
use crate::error::{Result, StaffError};
use crate::model::now;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

const BACKUP_STAMP: &str = "%Y%m%d-%H%M%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub output: PathBuf,
    /// Copy of the previous page, if there was one
    pub backup: Option<PathBuf>,
    /// Old backups removed by the retention limit
    pub pruned: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Publisher {
    output: PathBuf,
    backup_dir: PathBuf,
    retention: Option<usize>,
}

impl Publisher {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            output: config.output_file(),
            backup_dir: config.backup_path(),
            retention: config.backup_retention,
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn publish(&self, html: &str) -> Result<PublishReport> {
        self.publish_at(html, now())
    }

    /// Backs up the current page as of `stamp`, then overwrites it with `html`.
    pub fn publish_at(&self, html: &str, stamp: NaiveDateTime) -> Result<PublishReport> {
        let backup = if self.output.is_file() {
            fs::create_dir_all(&self.backup_dir).map_err(StaffError::Io)?;
            let target = self.backup_dir.join(self.backup_name(stamp));
            fs::copy(&self.output, &target).map_err(StaffError::Io)?;
            tracing::info!("Backed up {} to {}", self.output.display(), target.display());
            Some(target)
        } else {
            None
        };

        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(StaffError::Io)?;
            }
        }
        fs::write(&self.output, html).map_err(StaffError::Io)?;
        tracing::info!("Wrote {}", self.output.display());

        let pruned = match self.retention {
            Some(keep) => self.prune(keep)?,
            None => Vec::new(),
        };

        Ok(PublishReport {
            output: self.output.clone(),
            backup,
            pruned,
        })
    }

    /// Existing backups of this page, oldest first.
    pub fn backups(&self) -> Result<Vec<PathBuf>> {
        if !self.backup_dir.is_dir() {
            return Ok(Vec::new());
        }
        let prefix = format!("{}.", self.stem());
        let mut found = Vec::new();
        for entry in fs::read_dir(&self.backup_dir).map_err(StaffError::Io)? {
            let path = entry.map_err(StaffError::Io)?.path();
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name,
                None => continue,
            };
            if path.is_file() && name.starts_with(&prefix) && name.ends_with(".html") {
                found.push(path);
            }
        }
        found.sort();
        Ok(found)
    }

    fn prune(&self, keep: usize) -> Result<Vec<PathBuf>> {
        let backups = self.backups()?;
        let excess = backups.len().saturating_sub(keep);
        let mut pruned = Vec::with_capacity(excess);
        for old in backups.into_iter().take(excess) {
            fs::remove_file(&old).map_err(StaffError::Io)?;
            tracing::debug!("Pruned backup {}", old.display());
            pruned.push(old);
        }
        Ok(pruned)
    }

    fn stem(&self) -> String {
        self.output
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "page".to_string())
    }

    fn backup_name(&self, stamp: NaiveDateTime) -> String {
        format!("{}.{}.html", self.stem(), stamp.format(BACKUP_STAMP))
    }
}
