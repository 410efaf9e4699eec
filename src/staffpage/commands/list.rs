use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Category;
use crate::store::{Directory, StoreBackend};

pub fn run<B: StoreBackend>(directory: &Directory<B>, category: Category) -> Result<CmdResult> {
    let records: Vec<_> = directory.list(category).into_iter().cloned().collect();
    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info(format!("No {} staff found.", category)));
    }
    Ok(result.with_listed_records(records))
}
