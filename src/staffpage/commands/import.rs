use crate::assets::{expand_home, AssetImporter};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StaffError};
use crate::form::RecordForm;
use std::path::{Path, PathBuf};

pub fn image(importer: &AssetImporter, source: &Path, id: &str) -> Result<CmdResult> {
    let stored = importer.store_image(source, id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Copied headshot to {}", stored)));
    Ok(result.with_stored_path(stored))
}

pub fn document(
    importer: &AssetImporter,
    source: &Path,
    id: &str,
    label: Option<&str>,
) -> Result<CmdResult> {
    let stored = importer.store_document(source, id, label)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Copied document to {}", stored)));
    Ok(result.with_stored_path(stored))
}

enum Pending {
    Image(PathBuf),
    Document(usize, PathBuf),
}

/// Brings every image or document path in `form` into the managed folders.
///
/// Paths that already name a project file are normalized to their relative form;
/// anything else is treated as an outside source and copied under `id`. Every source
/// is checked before the first copy, so a missing file leaves both the form and the
/// asset folders untouched.
pub fn form_assets(importer: &AssetImporter, form: &mut RecordForm, id: &str) -> Result<CmdResult> {
    let mut pending = Vec::new();

    if !form.image.trim().is_empty() {
        match importer.project_relative(&form.image) {
            Some(relative) => form.image = relative,
            None => pending.push(Pending::Image(expand_home(&form.image))),
        }
    }
    for (index, doc) in form.documents.iter_mut().enumerate() {
        if doc.path.trim().is_empty() {
            continue;
        }
        match importer.project_relative(&doc.path) {
            Some(relative) => doc.path = relative,
            None => pending.push(Pending::Document(index, expand_home(&doc.path))),
        }
    }

    for item in &pending {
        let source = match item {
            Pending::Image(source) | Pending::Document(_, source) => source,
        };
        if !source.is_file() {
            return Err(StaffError::MissingFile(source.clone()));
        }
    }

    let mut result = CmdResult::default();
    for item in pending {
        match item {
            Pending::Image(source) => {
                let stored = importer.store_image(&source, id)?;
                result.add_message(CmdMessage::info(format!("Copied headshot to {}", stored)));
                form.image = stored;
            }
            Pending::Document(index, source) => {
                let doc = &mut form.documents[index];
                let label = doc.label.trim().to_string();
                let stored = importer.store_document(&source, id, Some(&label))?;
                result.add_message(CmdMessage::info(format!(
                    "Copied document '{}' to {}",
                    label, stored
                )));
                doc.path = stored;
            }
        }
    }
    Ok(result)
}
