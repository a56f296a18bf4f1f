use crate::SERVICE_ACCESS_ROLE;
use crate::auth::{AdminUser, check_role};
use crate::domain::branch::Branch;
use crate::forms::branches::{AddBranchForm, EditBranchForm};
use crate::repository::{BranchReader, BranchWriter};
use crate::services::{ServiceError, ServiceResult};

/// Data required to render the branches index template.
pub struct BranchesPageData {
    /// All branches, newest first.
    pub branches: Vec<Branch>,
}

/// Loads the branches overview page.
pub fn load_branches<R>(repo: &R, user: &AdminUser) -> ServiceResult<BranchesPageData>
where
    R: BranchReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let branches = repo.list_branches().map_err(ServiceError::from)?;

    Ok(BranchesPageData { branches })
}

/// Creates a new branch.
pub fn create_branch<R>(repo: &R, user: &AdminUser, form: AddBranchForm) -> ServiceResult<Branch>
where
    R: BranchWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let new_branch = form
        .into_new_branch()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_branch(&new_branch).map_err(ServiceError::from)
}

/// Updates an existing branch.
pub fn modify_branch<R>(repo: &R, user: &AdminUser, form: EditBranchForm) -> ServiceResult<Branch>
where
    R: BranchWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let payload = form
        .into_update_branch()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_branch(payload.branch_id, &payload.update)
        .map_err(ServiceError::from)
}

/// Deletes a branch.
pub fn remove_branch<R>(repo: &R, user: &AdminUser, branch_id: i32) -> ServiceResult<()>
where
    R: BranchWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_branch(branch_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::repository::mock::{MockBranchReader, MockBranchWriter};

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_branch(id: i32, name: &str) -> Branch {
        Branch {
            id,
            name: name.to_string(),
            address: String::new(),
            contact: String::new(),
            is_active: true,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    fn admin() -> AdminUser {
        AdminUser::new("admin@example.com", "Admin")
    }

    #[test]
    fn load_branches_requires_role() {
        let repo = MockBranchReader::new();
        let user = AdminUser {
            email: "guest@example.com".to_string(),
            name: "Guest".to_string(),
            roles: Vec::new(),
        };

        assert!(matches!(
            load_branches(&repo, &user),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn create_branch_persists_sanitized_payload() {
        let mut repo = MockBranchWriter::new();

        repo.expect_create_branch()
            .times(1)
            .withf(|new_branch| {
                assert_eq!(new_branch.name, "Riverside");
                assert!(new_branch.is_active);
                true
            })
            .returning(|_| Ok(sample_branch(3, "Riverside")));

        let form = AddBranchForm {
            name: " Riverside ".to_string(),
            address: None,
            contact: None,
            is_active: true,
        };

        let branch = create_branch(&repo, &admin(), form).expect("expected success");
        assert_eq!(branch.id, 3);
    }
}
