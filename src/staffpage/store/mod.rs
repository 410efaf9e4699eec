//! # Storage Layer
//!
//! The [`Directory`] is the record store: two category buckets of [`StaffRecord`]s plus
//! [`Meta`], persisted as one JSON document. Where the bytes live is abstracted behind
//! [`StoreBackend`]:
//!
//! - [`fs::JsonFileBackend`]: production, a single file (default `data/staff_directory.json`)
//! - [`memory::InMemoryBackend`]: tests, counts writes so persistence can be asserted
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "meta":    { "last_updated": "...", "image_dir": "...", "document_dir": "..." },
//!   "medical": [ { "id": "...", "name": "...", ... } ],
//!   "support": [ ... ]
//! }
//! ```
//!
//! Every mutation rewrites the whole document. Writes are plain overwrites, so a crash
//! mid-write can leave a truncated file; at a few dozen records that is accepted.
//! Unknown top-level keys are carried through untouched.

use crate::config::SiteConfig;
use crate::error::{Result, StaffError};
use crate::model::{now, slug, Category, Meta, StaffRecord};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract home of the serialized store.
pub trait StoreBackend {
    /// Raw store contents, or `None` if nothing has been written yet
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored contents
    fn write(&mut self, contents: &str) -> Result<()>;

    /// Path shown in messages and errors
    fn location(&self) -> PathBuf;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    meta: Meta,
    #[serde(default)]
    medical: Vec<StaffRecord>,
    #[serde(default)]
    support: Vec<StaffRecord>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl StoreData {
    fn bucket(&self, category: Category) -> &Vec<StaffRecord> {
        match category {
            Category::Medical => &self.medical,
            Category::Support => &self.support,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<StaffRecord> {
        match category {
            Category::Medical => &mut self.medical,
            Category::Support => &mut self.support,
        }
    }

    /// Fills in whatever an older or hand-edited file left out.
    fn backfill(&mut self, config: &SiteConfig) {
        if self.meta.image_dir.trim().is_empty() {
            self.meta.image_dir = config.image_dir.clone();
        }
        if self.meta.document_dir.trim().is_empty() {
            self.meta.document_dir = config.document_dir.clone();
        }
        for record in self.medical.iter_mut().chain(self.support.iter_mut()) {
            if record.id.trim().is_empty() {
                record.id = slug(&record.name);
            }
        }
    }
}

/// Outcome of [`Directory::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
    Inserted,
    Replaced,
}

/// The record store. Owns every record; callers get references or clones and must
/// come back through these methods to change anything.
pub struct Directory<B: StoreBackend> {
    backend: B,
    data: StoreData,
}

impl<B: StoreBackend> Directory<B> {
    /// Reads the store, creating and persisting an empty one if none exists.
    ///
    /// Fails with [`StaffError::Corrupt`] when the contents are not valid JSON; there is
    /// no attempt at repair.
    pub fn load(backend: B, config: &SiteConfig) -> Result<Self> {
        match backend.read()? {
            Some(contents) => {
                let mut data: StoreData =
                    serde_json::from_str(&contents).map_err(|source| StaffError::Corrupt {
                        path: backend.location(),
                        source,
                    })?;
                data.backfill(config);
                tracing::debug!(
                    medical = data.medical.len(),
                    support = data.support.len(),
                    "Loaded staff directory from {}",
                    backend.location().display()
                );
                Ok(Self { backend, data })
            }
            None => {
                let mut data = StoreData::default();
                data.backfill(config);
                let mut directory = Self { backend, data };
                directory.save()?;
                tracing::info!(
                    "Created empty staff directory at {}",
                    directory.backend.location().display()
                );
                Ok(directory)
            }
        }
    }

    pub fn meta(&self) -> &Meta {
        &self.data.meta
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    /// Records in display order: name, case-insensitive.
    pub fn list(&self, category: Category) -> Vec<&StaffRecord> {
        let mut records: Vec<&StaffRecord> = self.data.bucket(category).iter().collect();
        records.sort_by_key(|record| record.name.to_lowercase());
        records
    }

    /// Records in the order they are stored on disk.
    pub fn records(&self, category: Category) -> &[StaffRecord] {
        self.data.bucket(category)
    }

    pub fn find(&self, category: Category, id: &str) -> Option<&StaffRecord> {
        self.data
            .bucket(category)
            .iter()
            .find(|record| record.id == id)
    }

    pub fn contains(&self, category: Category, id: &str) -> bool {
        self.find(category, id).is_some()
    }

    /// Replaces the record with the same id, or appends it. Always persists.
    pub fn upsert(&mut self, category: Category, record: StaffRecord) -> Result<Upserted> {
        let bucket = self.data.bucket_mut(category);
        let outcome = match bucket.iter().position(|existing| existing.id == record.id) {
            Some(index) => {
                bucket[index] = record;
                Upserted::Replaced
            }
            None => {
                bucket.push(record);
                Upserted::Inserted
            }
        };
        self.save()?;
        Ok(outcome)
    }

    /// Deletes the first record with `id`. Persists only when something was removed.
    pub fn remove(&mut self, category: Category, id: &str) -> Result<bool> {
        let bucket = self.data.bucket_mut(category);
        let Some(index) = bucket.iter().position(|record| record.id == id) else {
            return Ok(false);
        };
        bucket.remove(index);
        self.save()?;
        Ok(true)
    }

    /// Stamps `last_updated` and rewrites the whole store.
    pub fn save(&mut self) -> Result<()> {
        self.data.meta.last_updated = now();
        let contents = self.to_json()?;
        self.backend.write(&contents)?;
        tracing::debug!("Saved staff directory to {}", self.backend.location().display());
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.data).map_err(StaffError::Serialization)
    }
}

#[cfg(test)]
pub mod fixtures {
    use crate::form::RecordForm;
    use crate::model::StaffRecord;

    /// A validated record with just a name and title.
    pub fn record(name: &str, title: &str) -> StaffRecord {
        let mut form = RecordForm::named(name);
        form.title = title.to_string();
        StaffRecord::from_form(None, &form).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::record;
    use super::memory::InMemoryBackend;
    use super::*;

    fn empty_directory() -> Directory<InMemoryBackend> {
        Directory::load(InMemoryBackend::new(), &SiteConfig::default()).unwrap()
    }

    #[test]
    fn test_missing_store_is_created_with_defaults() {
        let directory = empty_directory();
        assert_eq!(directory.backend().writes(), 1);
        assert_eq!(directory.meta().image_dir, "assets/images/staff");
        assert_eq!(directory.meta().document_dir, "assets/files/staff");
        assert!(directory.list(Category::Medical).is_empty());

        let written: Value = serde_json::from_str(directory.backend().contents().unwrap()).unwrap();
        assert_eq!(written["medical"], Value::Array(vec![]));
        assert_eq!(written["support"], Value::Array(vec![]));
    }

    #[test]
    fn test_load_backfills_missing_meta_and_buckets() {
        let backend = InMemoryBackend::with_contents(
            r#"{ "meta": { "image_dir": "img/people" }, "medical": [ { "name": "No Id" } ] }"#,
        );
        let directory = Directory::load(backend, &SiteConfig::default()).unwrap();
        assert_eq!(directory.meta().image_dir, "img/people");
        assert_eq!(directory.meta().document_dir, "assets/files/staff");
        assert!(directory.records(Category::Support).is_empty());
        assert!(directory.find(Category::Medical, "no-id").is_some());
        assert_eq!(directory.backend().writes(), 0);
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let backend = InMemoryBackend::with_contents("{ not json");
        let err = Directory::load(backend, &SiteConfig::default()).err().unwrap();
        assert!(matches!(err, StaffError::Corrupt { .. }));
    }

    #[test]
    fn test_upsert_then_find_round_trips() {
        let mut directory = empty_directory();
        let jane = record("Jane Doe", "Physician");
        assert_eq!(
            directory.upsert(Category::Medical, jane.clone()).unwrap(),
            Upserted::Inserted
        );
        assert_eq!(directory.find(Category::Medical, "jane-doe"), Some(&jane));
        assert_eq!(directory.find(Category::Support, "jane-doe"), None);

        let reloaded = Directory::load(
            InMemoryBackend::with_contents(directory.backend().contents().unwrap()),
            &SiteConfig::default(),
        )
        .unwrap();
        assert_eq!(reloaded.find(Category::Medical, "jane-doe"), Some(&jane));
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut directory = empty_directory();
        directory.upsert(Category::Medical, record("Zed", "A")).unwrap();
        directory.upsert(Category::Medical, record("Amy", "B")).unwrap();

        let outcome = directory
            .upsert(Category::Medical, record("Zed", "Updated"))
            .unwrap();
        assert_eq!(outcome, Upserted::Replaced);

        let stored = directory.records(Category::Medical);
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id, "zed");
        assert_eq!(stored[0].title, "Updated");
    }

    #[test]
    fn test_list_sorts_case_insensitively_without_reordering_storage() {
        let mut directory = empty_directory();
        for name in ["charlie", "Bravo", "alpha"] {
            directory.upsert(Category::Support, record(name, "")).unwrap();
        }
        let names: Vec<&str> = directory
            .list(Category::Support)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["alpha", "Bravo", "charlie"]);
        assert_eq!(directory.records(Category::Support)[0].name, "charlie");
    }

    #[test]
    fn test_same_slug_in_different_categories() {
        let mut directory = empty_directory();
        directory.upsert(Category::Medical, record("Pat Lee", "Nurse")).unwrap();
        directory.upsert(Category::Support, record("Pat Lee", "Billing")).unwrap();
        assert_eq!(directory.find(Category::Medical, "pat-lee").unwrap().title, "Nurse");
        assert_eq!(directory.find(Category::Support, "pat-lee").unwrap().title, "Billing");
    }

    #[test]
    fn test_remove_missing_id_does_not_persist() {
        let mut directory = empty_directory();
        directory.upsert(Category::Medical, record("Jane Doe", "")).unwrap();
        let writes = directory.backend().writes();
        let before = directory.backend().contents().unwrap().to_string();

        assert!(!directory.remove(Category::Medical, "nobody").unwrap());
        assert_eq!(directory.backend().writes(), writes);
        assert_eq!(directory.backend().contents().unwrap(), before);

        assert!(directory.remove(Category::Medical, "jane-doe").unwrap());
        assert_eq!(directory.backend().writes(), writes + 1);
        assert!(directory.list(Category::Medical).is_empty());
    }

    #[test]
    fn test_unknown_top_level_keys_survive_a_rewrite() {
        let backend = InMemoryBackend::with_contents(
            r#"{ "meta": {}, "medical": [], "support": [], "notes": "keep me" }"#,
        );
        let mut directory = Directory::load(backend, &SiteConfig::default()).unwrap();
        directory.save().unwrap();
        let written: Value = serde_json::from_str(directory.backend().contents().unwrap()).unwrap();
        assert_eq!(written["notes"], "keep me");
    }
}
