use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StaffError};
use crate::form::RecordForm;
use crate::model::{Category, StaffRecord};
use crate::store::{Directory, StoreBackend};

/// Replaces the record `id` with the validated contents of `form`. The id is kept
/// even when the name changes.
pub fn run<B: StoreBackend>(
    directory: &mut Directory<B>,
    category: Category,
    id: &str,
    form: &RecordForm,
) -> Result<CmdResult> {
    if !directory.contains(category, id) {
        return Err(StaffError::NotFound {
            category,
            id: id.to_string(),
        });
    }

    let record = StaffRecord::from_form(Some(id), form)?;
    directory.upsert(category, record.clone())?;
    tracing::info!(id = %record.id, %category, "Updated staff member");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Updated {}.", record.name)));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::fixture;
    use crate::store::fixtures::record;

    #[test]
    fn rename_keeps_id() {
        let mut fx = fixture();
        fx.directory
            .upsert(Category::Medical, record("Jane Doe", "Nurse"))
            .unwrap();

        let mut form = RecordForm::from(fx.directory.find(Category::Medical, "jane-doe").unwrap());
        form.name = "Jane Smith".into();
        form.experience = "7".into();
        run(&mut fx.directory, Category::Medical, "jane-doe", &form).unwrap();

        let records = fx.directory.records(Category::Medical);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "jane-doe");
        assert_eq!(records[0].name, "Jane Smith");
        assert_eq!(records[0].experience_years, Some(7));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut fx = fixture();
        let err = run(
            &mut fx.directory,
            Category::Medical,
            "ghost",
            &RecordForm::named("Ghost"),
        )
        .unwrap_err();
        assert!(matches!(err, StaffError::NotFound { .. }));
        assert!(fx.directory.records(Category::Medical).is_empty());
    }
}
