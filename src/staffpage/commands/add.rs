use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StaffError};
use crate::form::RecordForm;
use crate::model::{Category, StaffRecord};
use crate::store::{Directory, StoreBackend};

/// Creates a record from `form`. The id comes from the name and must be free.
pub fn run<B: StoreBackend>(
    directory: &mut Directory<B>,
    category: Category,
    form: &RecordForm,
) -> Result<CmdResult> {
    let record = StaffRecord::from_form(None, form)?;
    if directory.contains(category, &record.id) {
        return Err(StaffError::AlreadyExists {
            category,
            id: record.id,
        });
    }

    directory.upsert(category, record.clone())?;
    tracing::info!(id = %record.id, %category, "Added staff member");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} to {} staff.",
        record.name, category
    )));
    Ok(result.with_affected_records(vec![record]))
}
