//! # Form Editor Session
//!
//! The state behind the form editor, kept free of any terminal code so the same
//! session can sit behind another front end. A session tracks:
//!
//! - the category whose records fill the list pane
//! - the selected record id, or `None` while editing an unsaved new record
//! - the working [`RecordForm`]; nothing reaches the store until [`FormSession::save`]
//! - an [`ActivityLog`] of what was done, newest last
//!
//! Actions that need the user's agreement take a `confirm` callback and return
//! [`Outcome::Cancelled`] when it says no.

use crate::api::StaffApi;
use crate::audit::{ActivityEntry, ActivityLog, RECENT_ENTRIES};
use crate::commands::CmdResult;
use crate::error::{Result, StaffError, ValidationError};
use crate::form::RecordForm;
use crate::model::{Category, Document, StaffRecord};
use crate::store::StoreBackend;
use std::path::Path;

#[derive(Debug)]
pub enum Outcome {
    Done(CmdResult),
    Cancelled,
    NothingSelected,
}

pub struct FormSession<B: StoreBackend> {
    api: StaffApi<B>,
    category: Category,
    selected: Option<String>,
    form: RecordForm,
    log: ActivityLog,
}

impl<B: StoreBackend> FormSession<B> {
    pub fn new(api: StaffApi<B>) -> Self {
        let capacity = api.config().audit_capacity;
        Self {
            api,
            category: Category::Medical,
            selected: None,
            form: RecordForm::default(),
            log: ActivityLog::new(capacity),
        }
    }

    pub fn api(&self) -> &StaffApi<B> {
        &self.api
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn form(&self) -> &RecordForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RecordForm {
        &mut self.form
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn recent_activity(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.log.recent(RECENT_ENTRIES)
    }

    /// Records of the current category in display order.
    pub fn records(&self) -> Vec<&StaffRecord> {
        self.api.directory().list(self.category)
    }

    /// Switches the list pane and starts a blank form.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.new_record();
    }

    /// Loads record `id` of the current category into the form.
    pub fn select(&mut self, id: &str) -> Result<()> {
        let record = self
            .api
            .directory()
            .find(self.category, id)
            .ok_or_else(|| StaffError::NotFound {
                category: self.category,
                id: id.to_string(),
            })?;
        self.form = RecordForm::from(record);
        self.selected = Some(record.id.clone());
        Ok(())
    }

    /// Clears the form for a record that does not exist yet.
    pub fn new_record(&mut self) {
        self.selected = None;
        self.form = RecordForm::default();
    }

    /// Id the form would be saved under.
    fn target_id(&self) -> String {
        self.selected.clone().unwrap_or_else(|| self.form.slug())
    }

    /// Commits the form to the store.
    ///
    /// A new record whose name slugs to an existing id replaces that record only if
    /// `confirm` (given the existing record's name) agrees. Referenced files from outside
    /// the project are imported first; a missing one aborts the save.
    pub fn save<F>(&mut self, confirm: F) -> Result<Outcome>
    where
        F: FnOnce(&str) -> bool,
    {
        self.form.validate()?;
        let id = self.target_id();
        let existing = self
            .api
            .directory()
            .find(self.category, &id)
            .map(|record| record.name.clone());

        if self.selected.is_none() {
            if let Some(name) = &existing {
                if !confirm(name) {
                    return Ok(Outcome::Cancelled);
                }
            }
        }

        let mut form = self.form.clone();
        let imported = self.api.import_form_assets(&mut form, &id)?;
        for message in &imported.messages {
            self.log.record(message.content.clone());
        }

        let mut result = if existing.is_some() {
            self.api.update_staff(self.category, &id, &form)?
        } else {
            self.api.add_staff(self.category, &form)?
        };
        let mut messages = imported.messages;
        messages.append(&mut result.messages);
        result.messages = messages;

        if let Some(record) = result.affected_records.first() {
            self.form = RecordForm::from(record);
            self.selected = Some(record.id.clone());
            self.log.record(format!("Saved staff member {}", record.name));
        }
        Ok(Outcome::Done(result))
    }

    /// Removes the selected record after `confirm` agrees.
    pub fn delete<F>(&mut self, confirm: F) -> Result<Outcome>
    where
        F: FnOnce(&str) -> bool,
    {
        let Some(id) = self.selected.clone() else {
            return Ok(Outcome::NothingSelected);
        };
        let name = match self.api.directory().find(self.category, &id) {
            Some(record) => record.name.clone(),
            None => {
                return Err(StaffError::NotFound {
                    category: self.category,
                    id,
                })
            }
        };
        if !confirm(&name) {
            return Ok(Outcome::Cancelled);
        }

        let result = self.api.remove_staff(self.category, &id)?;
        self.new_record();
        self.log.record(format!("Deleted staff member {}", name));
        Ok(Outcome::Done(result))
    }

    /// Copies `source` in as the headshot and points the form at it. Not saved yet.
    pub fn choose_image(&mut self, source: &Path) -> Result<CmdResult> {
        self.require_name()?;
        let id = self.target_id();
        let result = self.api.import_image(source, &id)?;
        if let Some(stored) = &result.stored_path {
            self.form.image = stored.clone();
        }
        self.log
            .record(format!("Updated headshot for {}", self.form.name.trim()));
        Ok(result)
    }

    /// Copies `source` in as a document and appends it to the form. Not saved yet.
    pub fn add_document(&mut self, label: &str, source: &Path) -> Result<CmdResult> {
        self.require_name()?;
        let label = label.trim();
        if label.is_empty() {
            return Err(ValidationError::LabelRequired.into());
        }
        let id = self.target_id();
        let result = self.api.import_document(source, &id, Some(label))?;
        if let Some(stored) = &result.stored_path {
            self.form.documents.push(Document::new(label, stored.clone()));
        }
        self.log.record(format!("Attached document '{}'", label));
        Ok(result)
    }

    /// Drops document `index` from the form after `confirm` agrees.
    pub fn remove_document<F>(&mut self, index: usize, confirm: F) -> Outcome
    where
        F: FnOnce(&Document) -> bool,
    {
        let Some(doc) = self.form.documents.get(index) else {
            return Outcome::NothingSelected;
        };
        if !confirm(doc) {
            return Outcome::Cancelled;
        }
        let doc = self.form.documents.remove(index);
        self.log.record(format!("Removed document '{}'", doc.label));
        Outcome::Done(CmdResult::default())
    }

    /// Duplicates the selected record and selects the copy.
    pub fn duplicate(&mut self) -> Result<Outcome> {
        let Some(id) = self.selected.clone() else {
            return Ok(Outcome::NothingSelected);
        };
        let result = self.api.duplicate_staff(self.category, &id)?;
        if let Some(copy) = result.affected_records.first() {
            let copy_id = copy.id.clone();
            self.log
                .record(format!("Duplicated {} as {}", self.form.name.trim(), copy.name));
            self.select(&copy_id)?;
        }
        Ok(Outcome::Done(result))
    }

    pub fn generate(&mut self) -> Result<CmdResult> {
        let result = self.api.generate_page()?;
        self.log
            .record(format!("Generated {}", self.api.config().output_page));
        Ok(result)
    }

    pub fn export(&mut self, target: &Path) -> Result<CmdResult> {
        let result = self.api.export(target)?;
        self.log
            .record(format!("Exported staff directory to {}", target.display()));
        Ok(result)
    }

    fn require_name(&self) -> Result<()> {
        if self.form.name.trim().is_empty() {
            return Err(ValidationError::NameRequired.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::store::memory::InMemoryBackend;
    use std::fs;
    use tempfile::TempDir;

    fn session() -> (TempDir, FormSession<InMemoryBackend>) {
        let temp = tempfile::tempdir().unwrap();
        let api = StaffApi::new(InMemoryBackend::new(), SiteConfig::for_root(temp.path())).unwrap();
        (temp, FormSession::new(api))
    }

    fn save_new(session: &mut FormSession<InMemoryBackend>, name: &str, title: &str) {
        session.new_record();
        session.form_mut().name = name.into();
        session.form_mut().title = title.into();
        assert!(matches!(session.save(|_| true).unwrap(), Outcome::Done(_)));
    }

    #[test]
    fn test_save_new_record_selects_it() {
        let (_temp, mut session) = session();
        session.form_mut().name = "Jane Doe".into();
        session.form_mut().phone = "9015551234".into();

        session.save(|_| panic!("no overwrite expected")).unwrap();
        assert_eq!(session.selected(), Some("jane-doe"));
        assert_eq!(session.form().phone, "(901) 555-1234");
        assert_eq!(session.records().len(), 1);
        assert_eq!(
            session.log().recent(1).next().unwrap().message,
            "Saved staff member Jane Doe"
        );
    }

    #[test]
    fn test_edits_are_not_committed_until_save() {
        let (_temp, mut session) = session();
        save_new(&mut session, "Jane Doe", "Nurse");

        session.form_mut().title = "Director".into();
        let stored = session.api().directory().find(Category::Medical, "jane-doe").unwrap();
        assert_eq!(stored.title, "Nurse");

        session.save(|_| true).unwrap();
        let stored = session.api().directory().find(Category::Medical, "jane-doe").unwrap();
        assert_eq!(stored.title, "Director");
    }

    #[test]
    fn test_new_record_with_taken_slug_asks_before_overwriting() {
        let (_temp, mut session) = session();
        save_new(&mut session, "Jane Doe", "Nurse");

        session.new_record();
        session.form_mut().name = "jane doe".into();
        session.form_mut().title = "Impostor".into();
        let mut asked = None;
        let outcome = session
            .save(|name| {
                asked = Some(name.to_string());
                false
            })
            .unwrap();
        assert!(matches!(outcome, Outcome::Cancelled));
        assert_eq!(asked.as_deref(), Some("Jane Doe"));
        assert_eq!(
            session.api().directory().find(Category::Medical, "jane-doe").unwrap().title,
            "Nurse"
        );

        session.save(|_| true).unwrap();
        let records = session.api().directory().records(Category::Medical);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Impostor");
    }

    #[test]
    fn test_invalid_form_is_rejected_without_store_change() {
        let (_temp, mut session) = session();
        session.form_mut().name = "Sam".into();
        session.form_mut().linkedin = "linkedin.com/in/sam".into();
        let err = session.save(|_| true).unwrap_err();
        assert!(matches!(
            err,
            StaffError::Validation(ValidationError::InvalidUrl(_))
        ));
        assert!(session.records().is_empty());
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_save_imports_outside_image() {
        let (temp, mut session) = session();
        let elsewhere = tempfile::tempdir().unwrap();
        let source = elsewhere.path().join("face.jpg");
        fs::write(&source, "img").unwrap();

        session.form_mut().name = "Sam Lee".into();
        session.form_mut().image = source.to_string_lossy().into_owned();
        session.save(|_| true).unwrap();

        assert_eq!(session.form().image, "assets/images/staff/sam-lee.jpg");
        assert!(temp.path().join("assets/images/staff/sam-lee.jpg").is_file());
    }

    #[test]
    fn test_save_with_missing_image_aborts() {
        let (_temp, mut session) = session();
        session.form_mut().name = "Sam Lee".into();
        session.form_mut().image = "/no/such/face.jpg".into();
        let err = session.save(|_| true).unwrap_err();
        assert!(matches!(err, StaffError::MissingFile(_)));
        assert!(session.records().is_empty());
    }

    #[test]
    fn test_delete_needs_selection_and_confirmation() {
        let (_temp, mut session) = session();
        assert!(matches!(
            session.delete(|_| true).unwrap(),
            Outcome::NothingSelected
        ));

        save_new(&mut session, "Ann", "");
        assert!(matches!(session.delete(|_| false).unwrap(), Outcome::Cancelled));
        assert_eq!(session.records().len(), 1);

        assert!(matches!(session.delete(|_| true).unwrap(), Outcome::Done(_)));
        assert!(session.records().is_empty());
        assert_eq!(session.selected(), None);
        assert_eq!(session.form(), &RecordForm::default());
    }

    #[test]
    fn test_choose_image_requires_name() {
        let (temp, mut session) = session();
        let source = temp.path().join("face.png");
        fs::write(&source, "img").unwrap();

        let err = session.choose_image(&source).unwrap_err();
        assert!(matches!(
            err,
            StaffError::Validation(ValidationError::NameRequired)
        ));

        session.form_mut().name = "Pat Kim".into();
        session.choose_image(&source).unwrap();
        assert_eq!(session.form().image, "assets/images/staff/pat-kim.png");
        assert!(session.records().is_empty());
    }

    #[test]
    fn test_add_and_remove_documents() {
        let (temp, mut session) = session();
        let source = temp.path().join("cv.pdf");
        fs::write(&source, "cv").unwrap();
        session.form_mut().name = "Pat Kim".into();

        session.add_document("Curriculum Vitae", &source).unwrap();
        assert_eq!(
            session.form().documents,
            vec![Document::new(
                "Curriculum Vitae",
                "assets/files/staff/pat-kim-curriculum-vitae.pdf"
            )]
        );

        assert!(matches!(
            session.remove_document(3, |_| true),
            Outcome::NothingSelected
        ));
        assert!(matches!(
            session.remove_document(0, |_| false),
            Outcome::Cancelled
        ));
        assert!(matches!(
            session.remove_document(0, |_| true),
            Outcome::Done(_)
        ));
        assert!(session.form().documents.is_empty());
    }

    #[test]
    fn test_duplicate_selects_copy() {
        let (_temp, mut session) = session();
        assert!(matches!(
            session.duplicate().unwrap(),
            Outcome::NothingSelected
        ));
        save_new(&mut session, "Jane Doe", "Nurse");

        session.duplicate().unwrap();
        assert_eq!(session.selected(), Some("jane-doe-copy"));
        assert_eq!(session.form().name, "Jane Doe (Copy)");
        assert_eq!(session.form().title, "Nurse");
    }

    #[test]
    fn test_category_switch_clears_form() {
        let (_temp, mut session) = session();
        save_new(&mut session, "Jane Doe", "");
        session.set_category(Category::Support);
        assert_eq!(session.selected(), None);
        assert!(session.records().is_empty());
        assert!(session.select("jane-doe").is_err());
    }

    #[test]
    fn test_generate_and_export_are_logged() {
        let (temp, mut session) = session();
        save_new(&mut session, "Jane Doe", "");
        session.generate().unwrap();
        session.export(&temp.path().join("copy.json")).unwrap();

        let messages: Vec<&str> = session
            .recent_activity()
            .map(|entry| entry.message.as_str())
            .collect();
        assert_eq!(messages[1], "Generated our-staff.html");
        assert!(messages[2].starts_with("Exported staff directory to "));
        assert!(temp.path().join("our-staff.html").is_file());
    }
}
