use crate::SERVICE_ACCESS_ROLE;
use crate::auth::{AdminUser, check_role};
use crate::domain::category::Category;
use crate::forms::categories::{AddCategoryForm, EditCategoryForm};
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult};

/// Data required to render the categories index template.
pub struct CategoriesPageData {
    /// All categories ordered by ascending display order.
    pub categories: Vec<Category>,
}

/// Loads the categories overview page.
pub fn load_categories<R>(repo: &R, user: &AdminUser) -> ServiceResult<CategoriesPageData>
where
    R: CategoryReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let categories = repo.list_categories().map_err(ServiceError::from)?;

    Ok(CategoriesPageData { categories })
}

/// Creates a new category.
pub fn create_category<R>(
    repo: &R,
    user: &AdminUser,
    form: AddCategoryForm,
) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let new_category = form
        .into_new_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_category(&new_category)
        .map_err(ServiceError::from)
}

/// Updates an existing category.
pub fn modify_category<R>(
    repo: &R,
    user: &AdminUser,
    form: EditCategoryForm,
) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let payload = form
        .into_update_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_category(payload.category_id, &payload.update)
        .map_err(ServiceError::from)
}

/// Deletes a category. Menu items keep existing with their category cleared.
pub fn remove_category<R>(repo: &R, user: &AdminUser, category_id: i32) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_category(category_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::repository::mock::{MockCategoryReader, MockCategoryWriter};
    use crate::repository::errors::RepositoryError;

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_category(id: i32, name: &str, display_order: i32) -> Category {
        Category {
            id,
            name: name.to_string(),
            icon: String::new(),
            display_order,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    fn admin() -> AdminUser {
        AdminUser::new("admin@example.com", "Admin")
    }

    #[test]
    fn load_categories_requires_role() {
        let repo = MockCategoryReader::new();
        let user = AdminUser {
            email: "guest@example.com".to_string(),
            name: "Guest".to_string(),
            roles: Vec::new(),
        };

        let result = load_categories(&repo, &user);

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn load_categories_returns_repository_order() {
        let mut repo = MockCategoryReader::new();

        repo.expect_list_categories().times(1).returning(|| {
            Ok(vec![
                sample_category(2, "Starters", 1),
                sample_category(1, "Mains", 2),
            ])
        });

        let data = load_categories(&repo, &admin()).expect("expected success");

        assert_eq!(data.categories.len(), 2);
        assert_eq!(data.categories[0].name, "Starters");
    }

    #[test]
    fn create_category_persists_sanitized_payload() {
        let mut repo = MockCategoryWriter::new();

        repo.expect_create_category()
            .times(1)
            .withf(|new_category| {
                assert_eq!(new_category.name, "Desserts");
                assert_eq!(new_category.display_order, 5);
                true
            })
            .returning(|_| Ok(sample_category(9, "Desserts", 5)));

        let form = AddCategoryForm {
            name: " Desserts ".to_string(),
            icon: None,
            display_order: 5,
        };

        let category = create_category(&repo, &admin(), form).expect("expected success");
        assert_eq!(category.id, 9);
    }

    #[test]
    fn remove_category_maps_missing_row_to_not_found() {
        let mut repo = MockCategoryWriter::new();

        repo.expect_delete_category()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let result = remove_category(&repo, &admin(), 404);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
