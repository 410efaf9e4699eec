//! Copies headshots and documents into the managed asset folders.
//!
//! Target names are derived from the record id (and the document label), so importing
//! again for the same record overwrites the previous file instead of piling up copies.
//! The renderer's missing-media check relies on these paths being plain
//! project-relative files.

use crate::config::SiteConfig;
use crate::error::{Result, StaffError};
use crate::model::{slug, Meta};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_IMAGE_EXT: &str = ".jpg";
const DEFAULT_DOCUMENT_EXT: &str = ".pdf";

#[derive(Debug, Clone)]
pub struct AssetImporter {
    root: PathBuf,
    image_dir: String,
    document_dir: String,
}

impl AssetImporter {
    pub fn new<P: AsRef<Path>>(root: P, image_dir: &str, document_dir: &str) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            image_dir: image_dir.trim_end_matches('/').to_string(),
            document_dir: document_dir.trim_end_matches('/').to_string(),
        }
    }

    /// Uses the folders recorded in the store, falling back to the config.
    pub fn from_meta(config: &SiteConfig, meta: &Meta) -> Self {
        let pick = |stored: &str, fallback: &str| {
            if stored.trim().is_empty() {
                fallback.to_string()
            } else {
                stored.to_string()
            }
        };
        Self::new(
            &config.root,
            &pick(&meta.image_dir, &config.image_dir),
            &pick(&meta.document_dir, &config.document_dir),
        )
    }

    pub fn image_dir(&self) -> PathBuf {
        self.root.join(&self.image_dir)
    }

    pub fn document_dir(&self) -> PathBuf {
        self.root.join(&self.document_dir)
    }

    /// Creates both asset folders if needed.
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [self.image_dir(), self.document_dir()] {
            if !dir.exists() {
                fs::create_dir_all(&dir).map_err(StaffError::Io)?;
            }
        }
        Ok(())
    }

    /// Whether `path` names an existing file under the project root.
    pub fn is_project_file(&self, path: &str) -> bool {
        self.project_relative(path).is_some()
    }

    /// The project-relative form of `path` if it names an existing file under the root.
    ///
    /// Accepts paths already relative to the root as well as absolute paths inside it.
    pub fn project_relative(&self, path: &str) -> Option<String> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        let candidate = Path::new(path);
        let relative = if candidate.is_absolute() {
            candidate.strip_prefix(&self.root).ok()?.to_path_buf()
        } else {
            candidate.to_path_buf()
        };
        if !self.root.join(&relative).is_file() {
            return None;
        }
        let parts: Vec<String> = relative
            .components()
            .map(|part| part.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(parts.join("/"))
    }

    /// Copies a headshot to `<image_dir>/<id><ext>` and returns the project-relative path.
    ///
    /// The extension is lowercased; files without one are stored as `.jpg`.
    pub fn store_image(&self, source: &Path, id: &str) -> Result<String> {
        let name = format!("{}{}", id, extension_or(source, DEFAULT_IMAGE_EXT));
        self.copy_into(source, &self.image_dir, &name)
    }

    /// Copies a document to `<document_dir>/<id>[-<label slug>]<ext>`.
    pub fn store_document(&self, source: &Path, id: &str, label: Option<&str>) -> Result<String> {
        let suffix = match label.map(str::trim) {
            Some(label) if !label.is_empty() => format!("-{}", slug(label)),
            _ => String::new(),
        };
        let name = format!(
            "{}{}{}",
            id,
            suffix,
            extension_or(source, DEFAULT_DOCUMENT_EXT)
        );
        self.copy_into(source, &self.document_dir, &name)
    }

    fn copy_into(&self, source: &Path, dir: &str, name: &str) -> Result<String> {
        if !source.is_file() {
            return Err(StaffError::MissingFile(source.to_path_buf()));
        }

        let target_dir = self.root.join(dir);
        fs::create_dir_all(&target_dir).map_err(StaffError::Io)?;
        let target = target_dir.join(name);

        // copying a file onto itself would truncate it
        let same_file = match (source.canonicalize(), target.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        };
        if !same_file {
            fs::copy(source, &target).map_err(StaffError::Io)?;
        }

        let relative = if dir.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", dir, name)
        };
        tracing::info!("Copied {} to {}", source.display(), relative);
        Ok(relative)
    }
}

/// Expands a leading `~` to the home directory, as a shell would.
pub fn expand_home(path: &str) -> PathBuf {
    let path = path.trim();
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest),
        None => PathBuf::from(path),
    }
}

fn extension_or(source: &Path, fallback: &str) -> String {
    source
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, AssetImporter) {
        let temp = tempfile::tempdir().unwrap();
        let importer = AssetImporter::new(temp.path(), "assets/images/staff", "assets/files/staff");
        (temp, importer)
    }

    fn source_file(temp: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = temp.path().join("incoming").join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_store_image_uses_id_and_lowercase_extension() {
        let (temp, importer) = setup();
        let source = source_file(&temp, "Headshot.JPEG", "img");

        let stored = importer.store_image(&source, "dr-jane-obrien").unwrap();
        assert_eq!(stored, "assets/images/staff/dr-jane-obrien.jpeg");
        assert_eq!(fs::read_to_string(temp.path().join(&stored)).unwrap(), "img");
    }

    #[test]
    fn test_store_image_without_extension_defaults_to_jpg() {
        let (temp, importer) = setup();
        let source = source_file(&temp, "portrait", "img");
        let stored = importer.store_image(&source, "sam").unwrap();
        assert_eq!(stored, "assets/images/staff/sam.jpg");
    }

    #[test]
    fn test_reimport_overwrites_same_target() {
        let (temp, importer) = setup();
        let first = source_file(&temp, "a.png", "first");
        let second = source_file(&temp, "b.png", "second");

        let a = importer.store_image(&first, "sam").unwrap();
        let b = importer.store_image(&second, "sam").unwrap();
        assert_eq!(a, b);
        assert_eq!(fs::read_to_string(temp.path().join(&b)).unwrap(), "second");
        assert_eq!(fs::read_dir(importer.image_dir()).unwrap().count(), 1);
    }

    #[test]
    fn test_store_document_names() {
        let (temp, importer) = setup();
        let cv = source_file(&temp, "cv.PDF", "cv");
        let notes = source_file(&temp, "notes", "notes");

        assert_eq!(
            importer
                .store_document(&cv, "sam", Some("Curriculum Vitae"))
                .unwrap(),
            "assets/files/staff/sam-curriculum-vitae.pdf"
        );
        assert_eq!(
            importer.store_document(&notes, "sam", None).unwrap(),
            "assets/files/staff/sam.pdf"
        );
        assert_eq!(
            importer.store_document(&cv, "sam", Some("  ")).unwrap(),
            "assets/files/staff/sam.pdf"
        );
    }

    #[test]
    fn test_missing_source_is_a_file_error() {
        let (temp, importer) = setup();
        let err = importer
            .store_image(&temp.path().join("nope.jpg"), "sam")
            .unwrap_err();
        assert!(matches!(err, StaffError::MissingFile(_)));
        assert!(!importer.image_dir().exists());
    }

    #[test]
    fn test_importing_a_managed_file_onto_itself_keeps_it() {
        let (temp, importer) = setup();
        let source = source_file(&temp, "sam.jpg", "keep");
        let stored = importer.store_image(&source, "sam").unwrap();

        let again = importer
            .store_image(&temp.path().join(&stored), "sam")
            .unwrap();
        assert_eq!(again, stored);
        assert_eq!(fs::read_to_string(temp.path().join(&stored)).unwrap(), "keep");
    }

    #[test]
    fn test_is_project_file() {
        let (temp, importer) = setup();
        let source = source_file(&temp, "sam.jpg", "x");
        let stored = importer.store_image(&source, "sam").unwrap();
        assert!(importer.is_project_file(&stored));
        assert!(!importer.is_project_file("assets/images/staff/ghost.jpg"));
        assert!(!importer.is_project_file(""));
    }

    #[test]
    fn test_project_relative_strips_the_root() {
        let (temp, importer) = setup();
        let source = source_file(&temp, "sam.jpg", "x");
        let stored = importer.store_image(&source, "sam").unwrap();

        let absolute = temp.path().join(&stored);
        assert_eq!(
            importer.project_relative(absolute.to_str().unwrap()),
            Some(stored.clone())
        );
        assert_eq!(importer.project_relative(&stored), Some(stored));
        assert_eq!(importer.project_relative("/elsewhere/sam.jpg"), None);
    }
}
