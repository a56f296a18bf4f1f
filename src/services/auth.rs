use validator::Validate;

use crate::auth::AdminUser;
use crate::forms::auth::LoginForm;
use crate::services::{ServiceError, ServiceResult};

/// Operator credentials loaded from the environment at startup.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl AdminCredentials {
    /// Build the configured credential pair, normalizing the email.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().to_lowercase(),
            password: password.into(),
        }
    }
}

/// Checks the submitted credentials and mints the session identity.
///
/// The failure message never distinguishes a wrong email from a wrong
/// password.
pub fn authenticate(credentials: &AdminCredentials, form: LoginForm) -> ServiceResult<AdminUser> {
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let email = form.email.trim().to_lowercase();

    if email != credentials.email || form.password != credentials.password {
        return Err(ServiceError::Unauthorized);
    }

    Ok(AdminUser::new(email, "Administrator"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::SERVICE_ACCESS_ROLE;
    use crate::auth::check_role;

    fn credentials() -> AdminCredentials {
        AdminCredentials::new("Admin@Example.com", "hunter2")
    }

    #[test]
    fn accepts_matching_credentials_ignoring_email_case() {
        let form = LoginForm {
            email: "admin@EXAMPLE.com".to_string(),
            password: "hunter2".to_string(),
        };

        let user = authenticate(&credentials(), form).expect("expected success");

        assert_eq!(user.email, "admin@example.com");
        assert!(check_role(SERVICE_ACCESS_ROLE, &user.roles));
    }

    #[test]
    fn rejects_wrong_password() {
        let form = LoginForm {
            email: "admin@example.com".to_string(),
            password: "guess".to_string(),
        };

        assert!(matches!(
            authenticate(&credentials(), form),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn rejects_malformed_email_as_form_error() {
        let form = LoginForm {
            email: "nope".to_string(),
            password: "hunter2".to_string(),
        };

        assert!(matches!(
            authenticate(&credentials(), form),
            Err(ServiceError::Form(_))
        ));
    }
}
