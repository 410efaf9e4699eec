//! Editable text buffers for a record and the validation that turns them into one.
//!
//! Both editors keep a [`RecordForm`] as their working copy. Nothing reaches the
//! store without going through [`StaffRecord::from_form`], which re-derives every
//! normalized field (lists, phone, optional values) and rejects bad input as a whole.

use crate::error::ValidationError;
use crate::model::{
    clean_list, format_list, is_valid_email, is_valid_url, normalize_phone, now, slug, Document,
    StaffRecord,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    pub name: String,
    pub title: String,
    pub credentials: String,
    pub specialties: String,
    pub description: String,
    pub experience: String,
    pub locations: String,
    pub languages: String,
    pub education: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub image: String,
    pub documents: Vec<Document>,
    pub tags: String,
    pub featured: bool,
}

impl RecordForm {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Id a brand new record with this name would get.
    pub fn slug(&self) -> String {
        slug(&self.name)
    }

    /// Checks the form without building a record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        let email = self.email.trim();
        if !email.is_empty() && !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }
        let linkedin = self.linkedin.trim();
        if !linkedin.is_empty() && !is_valid_url(linkedin) {
            return Err(ValidationError::InvalidUrl(linkedin.to_string()));
        }
        parse_experience(&self.experience)?;
        Ok(())
    }
}

impl From<&StaffRecord> for RecordForm {
    fn from(record: &StaffRecord) -> Self {
        Self {
            name: record.name.clone(),
            title: record.title.clone(),
            credentials: format_list(&record.credentials),
            specialties: format_list(&record.specialties),
            description: record.description.trim().to_string(),
            experience: record
                .experience_years
                .map(|years| years.to_string())
                .unwrap_or_default(),
            locations: format_list(&record.locations),
            languages: format_list(&record.languages),
            education: record.education.clone(),
            email: record.email.clone().unwrap_or_default(),
            phone: record.phone.clone().unwrap_or_default(),
            linkedin: record.linkedin.clone().unwrap_or_default(),
            image: record.image.clone().unwrap_or_default(),
            documents: record.documents.clone(),
            tags: format_list(&record.tags),
            featured: record.featured,
        }
    }
}

fn parse_experience(text: &str) -> Result<Option<u32>, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    if !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidExperience(text.to_string()));
    }
    text.parse::<u32>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidExperience(text.to_string()))
}

fn optional(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl StaffRecord {
    /// Builds a validated record from form input.
    ///
    /// `id` is the existing identifier when editing; new records derive theirs from
    /// the name. `last_modified` is always refreshed.
    pub fn from_form(id: Option<&str>, form: &RecordForm) -> Result<Self, ValidationError> {
        form.validate()?;
        let name = form.name.trim().to_string();
        let id = match id {
            Some(existing) if !existing.trim().is_empty() => existing.trim().to_string(),
            _ => slug(&name),
        };

        let documents = form
            .documents
            .iter()
            .filter(|doc| !doc.path.trim().is_empty())
            .map(|doc| {
                let label = doc.label.trim();
                Document::new(
                    if label.is_empty() { "Document" } else { label },
                    doc.path.trim(),
                )
            })
            .collect();

        Ok(Self {
            id,
            name,
            title: form.title.trim().to_string(),
            credentials: clean_list(&form.credentials),
            specialties: clean_list(&form.specialties),
            description: form.description.trim().to_string(),
            experience_years: parse_experience(&form.experience)?,
            locations: clean_list(&form.locations),
            languages: clean_list(&form.languages),
            education: form.education.trim().to_string(),
            email: optional(&form.email),
            phone: optional(&form.phone).map(|phone| normalize_phone(&phone)),
            linkedin: optional(&form.linkedin),
            image: optional(&form.image),
            documents,
            tags: clean_list(&form.tags),
            featured: form.featured,
            last_modified: now(),
        })
    }
}
