use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StaffError};
use crate::model::Category;
use crate::store::{Directory, StoreBackend};

pub fn run<B: StoreBackend>(
    directory: &mut Directory<B>,
    category: Category,
    id: &str,
) -> Result<CmdResult> {
    let not_found = || StaffError::NotFound {
        category,
        id: id.to_string(),
    };
    let record = directory.find(category, id).cloned().ok_or_else(not_found)?;
    if !directory.remove(category, id)? {
        return Err(not_found());
    }
    tracing::info!(id, %category, "Removed staff member");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Removed {}.", record.name)));
    Ok(result.with_affected_records(vec![record]))
}
