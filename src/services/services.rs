use crate::SERVICE_ACCESS_ROLE;
use crate::auth::{AdminUser, check_role};
use crate::domain::service::Service;
use crate::forms::services::{AddServiceForm, EditServiceForm};
use crate::repository::{ServiceReader, ServiceWriter};
use crate::services::{ServiceError, ServiceResult};

/// Data required to render the services index template.
pub struct ServicesPageData {
    /// All services, newest first.
    pub services: Vec<Service>,
}

/// Loads the services overview page.
pub fn load_services<R>(repo: &R, user: &AdminUser) -> ServiceResult<ServicesPageData>
where
    R: ServiceReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let services = repo.list_services().map_err(ServiceError::from)?;

    Ok(ServicesPageData { services })
}

/// Creates a new service.
pub fn create_service<R>(repo: &R, user: &AdminUser, form: AddServiceForm) -> ServiceResult<Service>
where
    R: ServiceWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let new_service = form
        .into_new_service()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_service(&new_service).map_err(ServiceError::from)
}

/// Updates an existing service.
pub fn modify_service<R>(
    repo: &R,
    user: &AdminUser,
    form: EditServiceForm,
) -> ServiceResult<Service>
where
    R: ServiceWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let payload = form
        .into_update_service()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_service(payload.service_id, &payload.update)
        .map_err(ServiceError::from)
}

/// Deletes a service.
pub fn remove_service<R>(repo: &R, user: &AdminUser, service_id: i32) -> ServiceResult<()>
where
    R: ServiceWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_service(service_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repository::mock::MockServiceWriter;
    use crate::repository::errors::RepositoryError;

    fn admin() -> AdminUser {
        AdminUser::new("admin@example.com", "Admin")
    }

    #[test]
    fn remove_service_maps_missing_row_to_not_found() {
        let mut repo = MockServiceWriter::new();

        repo.expect_delete_service()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        assert!(matches!(
            remove_service(&repo, &admin(), 11),
            Err(ServiceError::NotFound)
        ));
    }
}
