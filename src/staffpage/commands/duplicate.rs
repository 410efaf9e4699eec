use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StaffError};
use crate::form::RecordForm;
use crate::model::{slug, Category, StaffRecord};
use crate::store::{Directory, StoreBackend};

/// Copies record `id` under the first free name of the form `"{name} (Copy)"`,
/// `"{name} (Copy) 2"`, `"{name} (Copy) 3"`, ...
///
/// The copy points at the same image and document files as the source.
pub fn run<B: StoreBackend>(
    directory: &mut Directory<B>,
    category: Category,
    id: &str,
) -> Result<CmdResult> {
    let source = directory
        .find(category, id)
        .ok_or_else(|| StaffError::NotFound {
            category,
            id: id.to_string(),
        })?;

    let name = copy_name(directory, category, &source.name);
    let mut form = RecordForm::from(source);
    let source_name = std::mem::replace(&mut form.name, name);
    let record = StaffRecord::from_form(None, &form)?;

    directory.upsert(category, record.clone())?;
    tracing::info!(from = id, to = %record.id, "Duplicated staff member");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Duplicated {} as {}.",
        source_name, record.name
    )));
    Ok(result.with_affected_records(vec![record]))
}

/// First `"{name} (Copy)[ N]"` whose slug is not taken in `category`.
pub fn copy_name<B: StoreBackend>(directory: &Directory<B>, category: Category, name: &str) -> String {
    let base = format!("{} (Copy)", name);
    let mut candidate = base.clone();
    let mut suffix = 1;
    while directory.contains(category, &slug(&candidate)) {
        suffix += 1;
        candidate = format!("{} {}", base, suffix);
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::fixture;
    use crate::store::fixtures::record;

    #[test]
    fn copies_get_numbered_names() {
        let mut fx = fixture();
        fx.directory
            .upsert(Category::Medical, record("Jane Doe", "Nurse"))
            .unwrap();

        let first = run(&mut fx.directory, Category::Medical, "jane-doe").unwrap();
        let second = run(&mut fx.directory, Category::Medical, "jane-doe").unwrap();
        let third = run(&mut fx.directory, Category::Medical, "jane-doe").unwrap();

        assert_eq!(first.affected_records[0].name, "Jane Doe (Copy)");
        assert_eq!(first.affected_records[0].id, "jane-doe-copy");
        assert_eq!(second.affected_records[0].name, "Jane Doe (Copy) 2");
        assert_eq!(second.affected_records[0].id, "jane-doe-copy-2");
        assert_eq!(third.affected_records[0].name, "Jane Doe (Copy) 3");
        assert_eq!(fx.directory.records(Category::Medical).len(), 4);
        assert_eq!(
            fx.directory.find(Category::Medical, "jane-doe-copy").unwrap().title,
            "Nurse"
        );
    }

    #[test]
    fn unknown_source_is_not_found() {
        let mut fx = fixture();
        let err = run(&mut fx.directory, Category::Support, "nobody").unwrap_err();
        assert!(matches!(err, StaffError::NotFound { .. }));
    }
}
