use crate::assets::AssetImporter;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StaffError, ValidationError};
use crate::form::RecordForm;
use crate::model::{Category, Document, StaffRecord};
use crate::store::{Directory, StoreBackend};
use std::path::Path;

/// Imports `source` as a document of record `id` and appends it under `label`.
pub fn run<B: StoreBackend>(
    directory: &mut Directory<B>,
    importer: &AssetImporter,
    category: Category,
    id: &str,
    label: &str,
    source: &Path,
) -> Result<CmdResult> {
    let label = label.trim();
    if label.is_empty() {
        return Err(ValidationError::LabelRequired.into());
    }
    let existing = directory
        .find(category, id)
        .ok_or_else(|| StaffError::NotFound {
            category,
            id: id.to_string(),
        })?;

    let stored = importer.store_document(source, &existing.id, Some(label))?;
    let mut form = RecordForm::from(existing);
    form.documents.push(Document::new(label, stored.clone()));
    let record = StaffRecord::from_form(Some(id), &form)?;

    directory.upsert(category, record.clone())?;
    tracing::info!(id, document = %stored, "Attached document");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Attached document '{}'.", label)));
    Ok(result
        .with_affected_records(vec![record])
        .with_stored_path(stored))
}
