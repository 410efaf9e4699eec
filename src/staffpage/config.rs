use crate::error::{Result, StaffError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "staffpage.json";

const DEFAULT_DATA_PATH: &str = "data/staff_directory.json";
const DEFAULT_IMAGE_DIR: &str = "assets/images/staff";
const DEFAULT_DOCUMENT_DIR: &str = "assets/files/staff";
const DEFAULT_OUTPUT_PAGE: &str = "our-staff.html";
const DEFAULT_BACKUP_DIR: &str = "backup_staff_pages";
const DEFAULT_PLACEHOLDER_IMAGE: &str = "assets/images/healthcare-team-professional.jpg";
const DEFAULT_BIO_WIDTH: usize = 90;
const DEFAULT_AUDIT_CAPACITY: usize = 100;

/// Site layout, stored in `<root>/staffpage.json`.
///
/// Every path is relative to the project root; the root itself is never persisted
/// and is supplied when loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    #[serde(skip)]
    pub root: PathBuf,

    /// The JSON record store
    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// Default headshot folder, used when the store does not name one
    #[serde(default = "default_image_dir")]
    pub image_dir: String,

    /// Default document folder, used when the store does not name one
    #[serde(default = "default_document_dir")]
    pub document_dir: String,

    /// The generated page
    #[serde(default = "default_output_page")]
    pub output_page: String,

    /// Where previous versions of the page are copied before overwriting
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,

    /// Image shown for records without a headshot
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    /// Keep at most this many page backups; unbounded when absent
    #[serde(default)]
    pub backup_retention: Option<usize>,

    /// Column the bio text is wrapped at in the generated source
    #[serde(default = "default_bio_width")]
    pub bio_width: usize,

    /// Entries kept by the form editor's activity log
    #[serde(default = "default_audit_capacity")]
    pub audit_capacity: usize,
}

fn default_data_path() -> String {
    DEFAULT_DATA_PATH.to_string()
}

fn default_image_dir() -> String {
    DEFAULT_IMAGE_DIR.to_string()
}

fn default_document_dir() -> String {
    DEFAULT_DOCUMENT_DIR.to_string()
}

fn default_output_page() -> String {
    DEFAULT_OUTPUT_PAGE.to_string()
}

fn default_backup_dir() -> String {
    DEFAULT_BACKUP_DIR.to_string()
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

fn default_bio_width() -> usize {
    DEFAULT_BIO_WIDTH
}

fn default_audit_capacity() -> usize {
    DEFAULT_AUDIT_CAPACITY
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            data_path: default_data_path(),
            image_dir: default_image_dir(),
            document_dir: default_document_dir(),
            output_page: default_output_page(),
            backup_dir: default_backup_dir(),
            placeholder_image: default_placeholder_image(),
            backup_retention: None,
            bio_width: DEFAULT_BIO_WIDTH,
            audit_capacity: DEFAULT_AUDIT_CAPACITY,
        }
    }
}

impl SiteConfig {
    /// Defaults rooted at `root`.
    pub fn for_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Load config from the project root, or return defaults if not found
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let config_path = root.join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILENAME, root.display());
            return Ok(Self::for_root(root));
        }

        let content = fs::read_to_string(&config_path).map_err(StaffError::Io)?;
        let mut config: SiteConfig =
            serde_json::from_str(&content).map_err(StaffError::Serialization)?;
        config.root = root.to_path_buf();
        Ok(config)
    }

    /// Save config into the project root
    pub fn save(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StaffError::Io)?;
        }

        let config_path = self.root.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StaffError::Serialization)?;
        fs::write(config_path, content).map_err(StaffError::Io)?;
        Ok(())
    }

    /// Joins a project-relative path onto the root.
    pub fn resolve<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.root.join(relative)
    }

    pub fn data_file(&self) -> PathBuf {
        self.resolve(&self.data_path)
    }

    pub fn output_file(&self) -> PathBuf {
        self.resolve(&self.output_page)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.resolve(&self.backup_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.data_path, "data/staff_directory.json");
        assert_eq!(config.output_page, "our-staff.html");
        assert_eq!(config.backup_retention, None);
        assert_eq!(config.bio_width, 90);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = tempfile::tempdir().unwrap();
        let config = SiteConfig::load(temp.path()).unwrap();
        assert_eq!(config, SiteConfig::for_root(temp.path()));
        assert_eq!(
            config.data_file(),
            temp.path().join("data/staff_directory.json")
        );
    }

    #[test]
    fn test_save_and_load() {
        let temp = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::for_root(temp.path());
        config.output_page = "team.html".to_string();
        config.backup_retention = Some(5);
        config.save().unwrap();

        let loaded = SiteConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.output_page, "team.html");
        assert_eq!(loaded.backup_retention, Some(5));
        assert_eq!(loaded.root, temp.path());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "backup_dir": "old-pages" }"#,
        )
        .unwrap();

        let loaded = SiteConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.backup_dir, "old-pages");
        assert_eq!(loaded.image_dir, "assets/images/staff");
        assert_eq!(loaded.audit_capacity, 100);
    }
}
