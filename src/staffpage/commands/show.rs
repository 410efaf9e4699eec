use crate::commands::CmdResult;
use crate::error::{Result, StaffError};
use crate::model::Category;
use crate::store::{Directory, StoreBackend};

pub fn run<B: StoreBackend>(
    directory: &Directory<B>,
    category: Category,
    id: &str,
) -> Result<CmdResult> {
    let record = directory
        .find(category, id)
        .cloned()
        .ok_or_else(|| StaffError::NotFound {
            category,
            id: id.to_string(),
        })?;
    Ok(CmdResult::default().with_listed_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::fixture;
    use crate::store::fixtures::record;

    #[test]
    fn finds_by_id_within_category() {
        let mut fx = fixture();
        fx.directory
            .upsert(Category::Support, record("Sam Lee", "Billing"))
            .unwrap();

        let result = run(&fx.directory, Category::Support, "sam-lee").unwrap();
        assert_eq!(result.listed_records[0].title, "Billing");

        let err = run(&fx.directory, Category::Medical, "sam-lee").unwrap_err();
        assert!(matches!(err, StaffError::NotFound { .. }));
    }
}
